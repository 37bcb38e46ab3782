//! # Mock Framework
//!
//! Utilities for testing in isolation.
//!
//! Use [`create_mock_client`] to get a [`RegistryClient`] and the receiving end
//! of its mailbox, then helpers like [`expect_create`] or [`expect_generate`]
//! to assert what the client sent and answer on its behalf.
//!
//! [`ScriptedGenerator`] stands in for the external user generator.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tokio::sync::mpsc;

use crate::clients::RegistryClient;
use crate::domain::{GeneratedUser, User};
use crate::generator::{GeneratorError, UserGenerator};
use crate::messages::{RegistryRequest, Response};

/// Creates a client whose requests land on the returned receiver instead of
/// an actor.
pub fn create_mock_client(buffer_size: usize) -> (RegistryClient, mpsc::Receiver<RegistryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a CreateUser request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(User, Response<User>)> {
    match receiver.recv().await {
        Some(RegistryRequest::CreateUser { user, respond_to }) => Some((user, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateUser request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(User, Response<User>)> {
    match receiver.recv().await {
        Some(RegistryRequest::UpdateUser { user, respond_to }) => Some((user, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetUser request
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(String, Response<User>)> {
    match receiver.recv().await {
        Some(RegistryRequest::GetUser {
            username,
            respond_to,
        }) => Some((username, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GenerateUsers request
pub async fn expect_generate(
    receiver: &mut mpsc::Receiver<RegistryRequest>,
) -> Option<(i64, Response<Vec<User>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::GenerateUsers { count, respond_to }) => Some((count, respond_to)),
        _ => None,
    }
}

/// Generator double that replays scripted batches and records every request.
///
/// Once the script runs out it either fills each request with fresh, unique
/// usernames (see [`ScriptedGenerator::unique`]) or reports
/// [`GeneratorError::Unavailable`].
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    script: Mutex<VecDeque<Result<Vec<GeneratedUser>, GeneratorError>>>,
    requests: Mutex<Vec<usize>>,
    serial: AtomicUsize,
    fill_unique: bool,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that answers every unscripted request with exactly the
    /// requested number of never-seen usernames.
    pub fn unique() -> Self {
        Self {
            fill_unique: true,
            ..Self::default()
        }
    }

    pub fn then_batch(self, usernames: &[&str]) -> Self {
        let batch = usernames
            .iter()
            .map(|username| GeneratedUser {
                username: (*username).to_string(),
                first_name: "Generated".to_string(),
                last_name: (*username).to_string(),
                email: format!("{username}@example.com"),
                gender: "female".to_string(),
                picture: String::new(),
            })
            .collect();
        self.push(Ok(batch))
    }

    pub fn then_error(self, error: GeneratorError) -> Self {
        self.push(Err(error))
    }

    /// Batch sizes requested so far, in call order.
    pub fn requests(&self) -> Vec<usize> {
        self.requests.lock().unwrap().clone()
    }

    fn push(self, entry: Result<Vec<GeneratedUser>, GeneratorError>) -> Self {
        self.script.lock().unwrap().push_back(entry);
        self
    }

    fn fresh_batch(&self, count: usize) -> Vec<GeneratedUser> {
        (0..count)
            .map(|_| {
                let serial = self.serial.fetch_add(1, Ordering::SeqCst);
                GeneratedUser::new(format!("generated-{serial}"))
            })
            .collect()
    }
}

impl UserGenerator for ScriptedGenerator {
    async fn fetch_batch(&self, count: usize) -> Result<Vec<GeneratedUser>, GeneratorError> {
        self.requests.lock().unwrap().push(count);
        let scripted = self.script.lock().unwrap().pop_front();
        match scripted {
            Some(entry) => entry,
            None if self.fill_unique => Ok(self.fresh_batch(count)),
            None => Err(GeneratorError::Unavailable(
                "no scripted batch left".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            let user = User::new("mock").unwrap().with_name("Test");
            client.create_user("mock", user).await
        });

        let (user, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(user.username(), "mock");
        responder.send(Ok(user.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(user));
    }

    #[tokio::test]
    async fn scripted_generator_replays_then_fills() {
        let generator = ScriptedGenerator::unique().then_batch(&["a", "b"]);

        let first = generator.fetch_batch(5).await.unwrap();
        let second = generator.fetch_batch(3).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 3);
        assert_eq!(generator.requests(), vec![5, 3]);
    }

    #[tokio::test]
    async fn exhausted_script_is_unavailable() {
        let generator = ScriptedGenerator::new();
        let result = generator.fetch_batch(1).await;
        assert!(matches!(result, Err(GeneratorError::Unavailable(_))));
    }
}
