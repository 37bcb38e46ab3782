use thiserror::Error;

use crate::paged_collection::ZeroPageSize;

/// Errors reported by the registry and its clients.
///
/// Pagination misses are not errors: navigation returns `None` when it steps
/// past either end of the collection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    #[error("User not found: {0}")]
    NotFound(String),
    #[error("User already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Username is not unique: {0}")]
    AmbiguousState(String),
    #[error("User generator unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("User generator returned malformed data: {0}")]
    UpstreamMalformed(String),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl RegistryError {
    /// HTTP status an outer HTTP layer should answer with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RegistryError::NotFound(_) => 404,
            RegistryError::AlreadyExists(_) => 409,
            RegistryError::InvalidInput(_) => 400,
            RegistryError::AmbiguousState(_) => 500,
            RegistryError::UpstreamUnavailable(_) => 429,
            RegistryError::UpstreamMalformed(_) => 502,
            RegistryError::ActorCommunication(_) => 503,
        }
    }
}

impl From<ZeroPageSize> for RegistryError {
    fn from(error: ZeroPageSize) -> Self {
        RegistryError::InvalidInput(error.to_string())
    }
}
