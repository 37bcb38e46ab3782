//! Runtime configuration, read from command-line flags with environment
//! fallbacks.

use std::time::Duration;

use clap::Parser;
use reqwest::Url;

use crate::error::RegistryError;
use crate::registry::DEFAULT_PAGE_SIZE;

pub const DEFAULT_GENERATOR_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_GENERATOR_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAILBOX_SIZE: usize = 32;
pub const DEFAULT_GENERATE_COUNT: i64 = 25;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// `user_registry` settings.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "user_registry",
    about = "In-memory user registry with paginated listing and random-user import",
    version
)]
pub struct RegistryConfig {
    /// Users per page.
    #[arg(long, env = "REGISTRY_PAGE_SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
    /// Base URL of the random user generator.
    #[arg(long, env = "REGISTRY_GENERATOR_URL", default_value = DEFAULT_GENERATOR_URL)]
    pub generator_url: String,
    /// Per-request timeout for generator calls, in seconds.
    #[arg(long, env = "REGISTRY_GENERATOR_TIMEOUT_SECS", default_value_t = DEFAULT_GENERATOR_TIMEOUT_SECS)]
    pub generator_timeout_secs: u64,
    /// Request buffer of the registry actor.
    #[arg(long, env = "REGISTRY_MAILBOX_SIZE", default_value_t = DEFAULT_MAILBOX_SIZE)]
    pub mailbox_size: usize,
    /// Number of random users to import at startup.
    #[arg(
        long = "generate",
        env = "REGISTRY_GENERATE",
        default_value_t = DEFAULT_GENERATE_COUNT,
        allow_negative_numbers = true
    )]
    pub generate: i64,
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = "REGISTRY_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            generator_url: DEFAULT_GENERATOR_URL.to_string(),
            generator_timeout_secs: DEFAULT_GENERATOR_TIMEOUT_SECS,
            mailbox_size: DEFAULT_MAILBOX_SIZE,
            generate: DEFAULT_GENERATE_COUNT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl RegistryConfig {
    /// # Errors
    /// Returns [`RegistryError::InvalidInput`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.page_size == 0 {
            return Err(RegistryError::InvalidInput(
                "page size must be at least 1".to_string(),
            ));
        }
        if self.mailbox_size == 0 {
            return Err(RegistryError::InvalidInput(
                "mailbox size must be at least 1".to_string(),
            ));
        }
        self.generator_endpoint()?;
        Ok(())
    }

    /// # Errors
    /// Returns [`RegistryError::InvalidInput`] if the URL does not parse.
    pub fn generator_endpoint(&self) -> Result<Url, RegistryError> {
        Url::parse(&self.generator_url).map_err(|e| {
            RegistryError::InvalidInput(format!(
                "invalid generator url '{}': {e}",
                self.generator_url
            ))
        })
    }

    pub fn generator_timeout(&self) -> Duration {
        Duration::from_secs(self.generator_timeout_secs)
    }
}
