//! The external random-user generator, seen from the registry.
//!
//! [`UserGenerator`] is the port the import algorithm calls; the reqwest-backed
//! adapter lives in [`http`].

pub mod http;
mod dto;

use std::future::Future;

use thiserror::Error;

use crate::domain::GeneratedUser;
use crate::error::RegistryError;

/// Largest batch a single generator call may request.
pub const MAX_BATCH_SIZE: usize = 5000;

/// Failure kinds a generator can report.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GeneratorError {
    /// Overloaded, rate limited or unreachable. Callers may retry later.
    #[error("generator unavailable: {0}")]
    Unavailable(String),
    /// The response could not be turned into generated users.
    #[error("generator response malformed: {0}")]
    Malformed(String),
}

impl From<GeneratorError> for RegistryError {
    fn from(error: GeneratorError) -> Self {
        match error {
            GeneratorError::Unavailable(message) => RegistryError::UpstreamUnavailable(message),
            GeneratorError::Malformed(message) => RegistryError::UpstreamMalformed(message),
        }
    }
}

/// Source of random users.
///
/// Callers keep `count` within `1..=MAX_BATCH_SIZE`. A batch may contain
/// fewer or more users than requested, and usernames may repeat within a
/// batch or across batches.
pub trait UserGenerator: Send + Sync + 'static {
    fn fetch_batch(
        &self,
        count: usize,
    ) -> impl Future<Output = Result<Vec<GeneratedUser>, GeneratorError>> + Send;
}
