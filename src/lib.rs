//! # User Registry
//!
//! An in-memory user registry with cursor-based pagination and a deduplicating
//! bulk import from an external random-user generator.
//!
//! ## Pieces
//!
//! - **Domain types** - plain business data → [`User`], [`Gender`], [`GeneratedUser`]
//! - **Paged collection** - ordered sequence with fixed-size pages and a movable
//!   cursor → [`PagedCollection`]
//! - **Registry** - CRUD keyed by username, cursor-relative navigation and
//!   bulk import → [`Registry`]
//! - **Generator port** - the external user source → [`UserGenerator`],
//!   with a reqwest adapter in [`RandomUserHttpGenerator`]
//! - **Actor + client** - one task owns the registry and serves typed requests;
//!   callers hold a cloneable [`RegistryClient`]
//! - **System** - startup and shutdown → [`RegistrySystem`]; logging →
//!   [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! let config = RegistryConfig::default();
//! let generator = RandomUserHttpGenerator::new(config.generator_endpoint()?, config.generator_timeout())?;
//! let system = RegistrySystem::new(&config, generator)?;
//!
//! let imported = system.client.generate_users(25).await?;
//! let first_page = system.client.current_page().await?;
//!
//! system.shutdown().await?;
//! ```

pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod messages;
pub mod paged_collection;
pub mod registry;
pub mod registry_actor;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, RegistrySystem};
pub use clients::RegistryClient;
pub use config::RegistryConfig;
pub use domain::{Gender, GeneratedUser, User};
pub use error::RegistryError;
pub use generator::http::RandomUserHttpGenerator;
pub use generator::{GeneratorError, UserGenerator, MAX_BATCH_SIZE};
pub use paged_collection::{PagedCollection, ZeroPageSize};
pub use registry::Registry;
