use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

use crate::domain::User;
use crate::error::RegistryError;
use crate::messages::RegistryRequest;

/// Client for interacting with the registry actor.
///
/// This is the surface an outer CLI or HTTP layer calls. Cloning is cheap;
/// every clone talks to the same actor.
#[derive(Clone, Debug)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    /// Stores `user` under `path_username`.
    ///
    /// # Errors
    /// [`RegistryError::InvalidInput`] if the two usernames differ, otherwise
    /// whatever the registry reports (e.g. [`RegistryError::AlreadyExists`]).
    #[instrument(skip(self, user), fields(username = %user.username()))]
    pub async fn create_user(&self, path_username: &str, user: User) -> Result<User, RegistryError> {
        check_same_username(path_username, &user)?;
        self.send_create(user).await
    }

    /// Updates the stored user named `path_username` with the fields of `user`.
    ///
    /// # Errors
    /// [`RegistryError::InvalidInput`] if the two usernames differ,
    /// [`RegistryError::NotFound`] if no such user is stored.
    #[instrument(skip(self, user), fields(username = %user.username()))]
    pub async fn update_user(&self, path_username: &str, user: User) -> Result<User, RegistryError> {
        check_same_username(path_username, &user)?;
        self.send_update(user).await
    }

    /// Asks the actor to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), RegistryError> {
        debug!("Sending request");
        self.sender
            .send(RegistryRequest::Shutdown)
            .await
            .map_err(|_| RegistryError::ActorCommunication("Actor closed".to_string()))
    }
}

fn check_same_username(path_username: &str, user: &User) -> Result<(), RegistryError> {
    if path_username == user.username() {
        return Ok(());
    }
    warn!(path_username, "Path and payload usernames differ");
    Err(RegistryError::InvalidInput(format!(
        "path username '{path_username}' does not match payload username '{}'",
        user.username()
    )))
}

client_method!(RegistryClient => pub fn current_page() -> Option<Vec<User>> as RegistryRequest::CurrentPage);
client_method!(RegistryClient => pub fn next_page(offset: usize) -> Option<Vec<User>> as RegistryRequest::NextPage);
client_method!(RegistryClient => pub fn previous_page(offset: usize) -> Option<Vec<User>> as RegistryRequest::PreviousPage);
client_method!(RegistryClient => pub fn get_user(username: String) -> User as RegistryRequest::GetUser);
client_method!(RegistryClient => fn send_create(user: User) -> User as RegistryRequest::CreateUser);
client_method!(RegistryClient => fn send_update(user: User) -> User as RegistryRequest::UpdateUser);
client_method!(RegistryClient => pub fn delete_user(username: String) -> User as RegistryRequest::DeleteUser);
client_method!(RegistryClient => pub fn generate_users(count: i64) -> Vec<User> as RegistryRequest::GenerateUsers);
client_method!(RegistryClient => pub fn user_count() -> usize as RegistryRequest::UserCount);
