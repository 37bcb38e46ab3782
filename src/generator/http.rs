//! Reqwest-backed generator adapter for the randomuser.me API.
//!
//! This adapter owns transport details only: building the request URL,
//! timeout and HTTP error mapping, and JSON decoding into [`GeneratedUser`]s.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use tracing::{debug, error, instrument};

use super::dto::RandomUserResponseDto;
use super::{GeneratorError, UserGenerator, MAX_BATCH_SIZE};
use crate::domain::GeneratedUser;

const USER_AGENT: &str = concat!("user-registry/", env!("CARGO_PKG_VERSION"));
const BODY_PREVIEW_CHARS: usize = 200;

/// Generator that performs one HTTP GET per batch against a randomuser.me
/// compatible endpoint.
pub struct RandomUserHttpGenerator {
    client: Client,
    endpoint: Url,
}

impl RandomUserHttpGenerator {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, endpoint })
    }

    fn batch_url(&self, count: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("results", &clamp_batch_size(count).to_string());
        url
    }
}

impl UserGenerator for RandomUserHttpGenerator {
    #[instrument(skip(self))]
    async fn fetch_batch(&self, count: usize) -> Result<Vec<GeneratedUser>, GeneratorError> {
        let url = self.batch_url(count);
        debug!(%url, "Requesting batch");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            let err = map_status_error(status, body.as_ref());
            error!(error = %err, "Generator rejected batch request");
            return Err(err);
        }

        let users = parse_users(body.as_ref())?;
        debug!(received = users.len(), "Batch decoded");
        Ok(users)
    }
}

/// Keeps a requested batch size inside what one call may ask for.
fn clamp_batch_size(count: usize) -> usize {
    count.clamp(1, MAX_BATCH_SIZE)
}

fn parse_users(body: &[u8]) -> Result<Vec<GeneratedUser>, GeneratorError> {
    let decoded: RandomUserResponseDto = serde_json::from_slice(body).map_err(|error| {
        GeneratorError::Malformed(format!("invalid generator JSON payload: {error}"))
    })?;
    decoded
        .into_generated_users()
        .map_err(GeneratorError::Malformed)
}

fn map_transport_error(error: reqwest::Error) -> GeneratorError {
    if error.is_decode() {
        GeneratorError::Malformed(error.to_string())
    } else {
        GeneratorError::Unavailable(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GeneratorError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    if status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
    {
        GeneratorError::Unavailable(message)
    } else {
        GeneratorError::Malformed(message)
    }
}

fn body_preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .trim()
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect()
}
