use tokio::sync::oneshot;

use crate::domain::User;
use crate::error::RegistryError;

/// Oneshot channel the actor answers a request on.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// Typed messages served by [`RegistryActor`](crate::registry_actor::RegistryActor).
/// Each variant carries its parameters and the channel for the reply.
#[derive(Debug)]
pub enum RegistryRequest {
    CurrentPage {
        respond_to: Response<Option<Vec<User>>>,
    },
    NextPage {
        offset: usize,
        respond_to: Response<Option<Vec<User>>>,
    },
    PreviousPage {
        offset: usize,
        respond_to: Response<Option<Vec<User>>>,
    },
    GetUser {
        username: String,
        respond_to: Response<User>,
    },
    CreateUser {
        user: User,
        respond_to: Response<User>,
    },
    UpdateUser {
        user: User,
        respond_to: Response<User>,
    },
    DeleteUser {
        username: String,
        respond_to: Response<User>,
    },
    GenerateUsers {
        count: i64,
        respond_to: Response<Vec<User>>,
    },
    UserCount {
        respond_to: Response<usize>,
    },
    Shutdown,
}
