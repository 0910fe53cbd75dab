//! Owner lookup: maps a property address to the owner's name and mailing address.

pub mod types;

pub use types::{LOOKUP_SOURCE, LookupOutcome, LookupRequest, OwnerInfo, OwnerInfoResponse};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::remote::{RemoteError, endpoint, get_client};

pub const OWNER_INFO_PATH: &str = "/api/owner-info";

/// Source of owner information for the enrichment run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OwnerLookup: Send + Sync {
    /// Look up one address. Failures are reported as `Unresolved`, never as panics
    /// or errors, so a batch can always carry on with the next row.
    async fn lookup(&self, request: &LookupRequest) -> LookupOutcome;
}

/// `OwnerLookup` backed by the owner-info HTTP service.
#[derive(Debug, Clone)]
pub struct HttpOwnerLookup {
    client: Client,
    base_url: String,
}

impl HttpOwnerLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(get_client().clone(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, request: &LookupRequest) -> Result<OwnerInfo, RemoteError> {
        let mut query = vec![("address", request.address.as_str()), ("source", request.source)];
        if let Some(link) = request.listing_link.as_deref() {
            query.push(("listing_link", link));
        }

        let response = self
            .client
            .get(endpoint(&self.base_url, OWNER_INFO_PATH))
            .query(&query)
            .send()
            .await
            .map_err(RemoteError::from_reqwest_error)?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or(body);
            return Err(RemoteError::Http { status, message });
        }

        let body = response
            .json::<OwnerInfoResponse>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(body.into())
    }
}

#[async_trait]
impl OwnerLookup for HttpOwnerLookup {
    #[instrument(skip_all, fields(address = %request.address))]
    async fn lookup(&self, request: &LookupRequest) -> LookupOutcome {
        match self.fetch(request).await {
            Ok(info) => {
                debug!(
                    has_name = !info.owner_name.is_empty(),
                    has_mailing_address = !info.mailing_address.is_empty(),
                    "owner lookup resolved"
                );
                LookupOutcome::Resolved(info)
            }
            Err(e) => {
                warn!("owner lookup failed: {}", e);
                LookupOutcome::unresolved(e.to_string())
            }
        }
    }
}
