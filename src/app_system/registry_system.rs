use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::clients::RegistryClient;
use crate::config::RegistryConfig;
use crate::domain::User;
use crate::error::RegistryError;
use crate::generator::UserGenerator;
use crate::registry::Registry;
use crate::registry_actor::RegistryActor;

/// The running registry: one actor task plus the client that talks to it.
///
/// Responsible for starting the actor and for shutting it down.
pub struct RegistrySystem {
    pub client: RegistryClient,
    handle: JoinHandle<()>,
}

impl RegistrySystem {
    /// Starts an empty registry. Must be called inside a tokio runtime.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidInput`] if the configuration is invalid.
    pub fn new<G: UserGenerator>(
        config: &RegistryConfig,
        generator: G,
    ) -> Result<Self, RegistryError> {
        Self::with_users(config, Vec::new(), generator)
    }

    /// Starts a registry preloaded with `users`.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidInput`] if the configuration is invalid.
    pub fn with_users<G: UserGenerator>(
        config: &RegistryConfig,
        users: Vec<User>,
        generator: G,
    ) -> Result<Self, RegistryError> {
        config.validate()?;
        info!(page_size = config.page_size, preloaded = users.len(), "Starting registry system");

        let registry = Registry::with_users(users, config.page_size, generator)?;
        let (actor, client) = RegistryActor::new(config.mailbox_size, registry);
        let handle = tokio::spawn(actor.run());

        Ok(Self { client, handle })
    }

    /// Stops the actor after the requests already queued and waits for it.
    pub async fn shutdown(self) -> Result<(), RegistryError> {
        info!("Shutting down registry system...");
        // The actor may already be gone; waiting on the handle still tells us how it ended.
        let _ = self.client.shutdown().await;
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Registry actor failed: {:?}", e);
            return Err(RegistryError::ActorCommunication(format!(
                "Registry actor failed: {e}"
            )));
        }

        info!("Registry system shutdown complete.");
        Ok(())
    }
}
