//! Single owner of a [`Registry`], serving requests one at a time.
//!
//! The registry itself is not synchronised. Every caller talks to it through a
//! [`RegistryClient`]; the actor drains its mailbox sequentially, so a long
//! import holds back later requests until it finishes.

use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use crate::clients::RegistryClient;
use crate::domain::User;
use crate::error::RegistryError;
use crate::generator::UserGenerator;
use crate::messages::RegistryRequest;
use crate::registry::Registry;

pub struct RegistryActor<G> {
    receiver: mpsc::Receiver<RegistryRequest>,
    registry: Registry<G>,
}

impl<G: UserGenerator> RegistryActor<G> {
    pub fn new(buffer_size: usize, registry: Registry<G>) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self { receiver, registry };
        (actor, RegistryClient::new(sender))
    }

    #[instrument(name = "registry_actor", skip(self))]
    pub async fn run(mut self) {
        info!(users = self.registry.len(), "RegistryActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::CurrentPage { respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.current_page()));
                }
                RegistryRequest::NextPage { offset, respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.page_forward(offset)));
                }
                RegistryRequest::PreviousPage { offset, respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.page_backward(offset)));
                }
                RegistryRequest::GetUser {
                    username,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.handle_get_user(&username));
                }
                RegistryRequest::CreateUser { user, respond_to } => {
                    let _ = respond_to.send(self.registry.create(user));
                }
                RegistryRequest::UpdateUser { user, respond_to } => {
                    let _ = respond_to.send(self.registry.update(&user));
                }
                RegistryRequest::DeleteUser {
                    username,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.registry.delete(&username));
                }
                RegistryRequest::GenerateUsers { count, respond_to } => {
                    let result = self.registry.import_random(count).await;
                    let _ = respond_to.send(result);
                }
                RegistryRequest::UserCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.registry.len()));
                }
                RegistryRequest::Shutdown => {
                    info!("RegistryActor shutting down");
                    break;
                }
            }
        }
        info!("RegistryActor stopped");
    }

    #[instrument(skip(self))]
    fn handle_get_user(&self, username: &str) -> Result<User, RegistryError> {
        match self.registry.find_by_username(username)? {
            Some(user) => Ok(user.clone()),
            None => {
                warn!("User not found");
                Err(RegistryError::NotFound(username.to_string()))
            }
        }
    }
}
