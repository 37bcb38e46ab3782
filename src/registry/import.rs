//! Deduplicating bulk import from the external generator.

use std::collections::HashSet;

use tracing::{debug, error, info, instrument, warn};

use super::Registry;
use crate::domain::User;
use crate::error::RegistryError;
use crate::generator::{UserGenerator, MAX_BATCH_SIZE};

/// Consecutive batches that may add no new user before the import gives up.
pub const MAX_FRUITLESS_BATCHES: usize = 10;

impl<G: UserGenerator> Registry<G> {
    /// Imports exactly `count` new users from the generator and returns them.
    ///
    /// The generator is called repeatedly, each time for what is still
    /// missing (at most [`MAX_BATCH_SIZE`]). A candidate is accepted only if
    /// its username is neither stored in the registry nor already accepted by
    /// this import. Accepted users are appended in one bulk insert once the
    /// count is reached; on any error nothing is inserted.
    ///
    /// A non-positive `count` returns an empty list without calling the
    /// generator.
    ///
    /// # Errors
    /// - [`RegistryError::UpstreamUnavailable`] if the generator is overloaded
    ///   or unreachable.
    /// - [`RegistryError::UpstreamMalformed`] if a batch cannot be decoded,
    ///   is empty, or [`MAX_FRUITLESS_BATCHES`] batches in a row add nothing.
    #[instrument(skip(self))]
    pub async fn import_random(&mut self, count: i64) -> Result<Vec<User>, RegistryError> {
        let target = match usize::try_from(count) {
            Ok(target) if target > 0 => target,
            _ => return Ok(Vec::new()),
        };

        let mut known: HashSet<String> = self
            .users
            .iter()
            .map(|user| user.username().to_string())
            .collect();
        let mut accepted: Vec<User> = Vec::with_capacity(target);
        let mut calls = 0usize;
        let mut fruitless = 0usize;

        while accepted.len() < target {
            let request = (target - accepted.len()).clamp(1, MAX_BATCH_SIZE);
            let batch = self.generator.fetch_batch(request).await.map_err(|e| {
                error!(error = %e, calls, accepted = accepted.len(), "Generator call failed");
                RegistryError::from(e)
            })?;
            calls += 1;

            if batch.is_empty() {
                error!(calls, "Generator returned an empty batch");
                return Err(RegistryError::UpstreamMalformed(
                    "generator returned an empty batch".to_string(),
                ));
            }

            let before = accepted.len();
            let received = batch.len();
            for generated in batch {
                if accepted.len() == target {
                    break;
                }
                let user = User::try_from(generated)?;
                if known.insert(user.username().to_string()) {
                    accepted.push(user);
                }
            }

            let added = accepted.len() - before;
            debug!(calls, request, received, added, "Batch processed");

            if added == 0 {
                fruitless += 1;
                warn!(fruitless, "Batch contained only known usernames");
                if fruitless >= MAX_FRUITLESS_BATCHES {
                    return Err(RegistryError::UpstreamMalformed(format!(
                        "{fruitless} consecutive batches contained only known usernames"
                    )));
                }
            } else {
                fruitless = 0;
            }
        }

        self.users.insert_all(accepted.iter().cloned());
        info!(imported = accepted.len(), calls, total = self.users.len(), "Random users imported");
        Ok(accepted)
    }
}
