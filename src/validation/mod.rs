//! Authoritative platform validation through the classification backend.

pub mod types;

pub use types::{ErrorResponse, PlatformDetectionResult, ValidateUrlRequest, ValidateUrlResponse};

use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::platform::{Platform, validate_format};
use crate::remote::{RemoteError, endpoint, get_client};

pub const VALIDATE_URL_PATH: &str = "/api/validate-url";

#[derive(Debug, Clone)]
pub struct ValidationClient {
    client: Client,
    base_url: String,
}

impl ValidationClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(get_client().clone(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Validate `url` and ask the backend which platform, table and location it
    /// belongs to.
    ///
    /// Format errors return before any request is made. The backend is called
    /// once, without retry, and every failure (error status, unreachable
    /// service, unreadable body) comes back as an invalid result.
    #[instrument(skip_all, fields(url = %url, expected = ?expected))]
    pub async fn validate_and_detect(
        &self,
        url: &str,
        expected: Option<Platform>,
    ) -> PlatformDetectionResult {
        if let Err(e) = validate_format(url) {
            return PlatformDetectionResult::invalid(e.to_string());
        }

        match self.request(url.trim(), expected).await {
            Ok(body) => {
                let result = reconcile(body, expected);
                info!(
                    platform = ?result.platform,
                    valid = result.is_valid,
                    "classification service answered"
                );
                result
            }
            Err(RemoteError::Http { status, message }) => {
                warn!(%status, "classification service rejected url: {}", message);
                PlatformDetectionResult::invalid(message)
            }
            Err(e) => {
                warn!("classification service call failed: {}", e);
                PlatformDetectionResult::invalid(e.to_string())
            }
        }
    }

    async fn request(
        &self,
        url: &str,
        expected: Option<Platform>,
    ) -> Result<ValidateUrlResponse, RemoteError> {
        let body = ValidateUrlRequest {
            url: url.to_string(),
            expected_platform: expected.map(|p| p.as_str().to_string()),
        };

        let response = self
            .client
            .post(endpoint(&self.base_url, VALIDATE_URL_PATH))
            .json(&body)
            .send()
            .await
            .map_err(RemoteError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) if !body.error.is_empty() => body.error,
                _ => format!("URL validation failed (HTTP {})", status.as_u16()),
            };
            return Err(RemoteError::Http { status, message });
        }

        response
            .json::<ValidateUrlResponse>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

/// Turn the backend's answer into a result, checking it against the caller's
/// expected platform.
fn reconcile(body: ValidateUrlResponse, expected: Option<Platform>) -> PlatformDetectionResult {
    let location = body.location.unwrap_or_default();

    let detected = match body.platform.as_deref().map(str::trim) {
        None | Some("") => Err("Could not detect a supported platform from URL".to_string()),
        Some(id) => id.parse::<Platform>().map_err(|e| e.to_string()),
    };

    let platform = match detected {
        Ok(platform) => platform,
        Err(error) => {
            return PlatformDetectionResult {
                platform: None,
                table: body.table,
                location,
                is_valid: false,
                error: Some(error),
            };
        }
    };

    let mismatch = expected
        .filter(|e| *e != platform)
        .map(|e| {
            format!(
                "URL is for {} ({}), but {} ({}) was expected",
                platform.display_name(),
                platform,
                e.display_name(),
                e
            )
        });

    PlatformDetectionResult {
        platform: Some(platform),
        table: body.table,
        location,
        is_valid: mismatch.is_none(),
        error: mismatch,
    }
}
