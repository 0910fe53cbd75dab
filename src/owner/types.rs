use serde::{Deserialize, Serialize};

/// Value sent as `source` on every lookup.
pub const LOOKUP_SOURCE: &str = "trulia";

/// Owner contact details. Empty strings mean "not known".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerInfo {
    pub owner_name: String,
    pub mailing_address: String,
}

/// One owner lookup for a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub address: String,
    pub source: &'static str,
    pub listing_link: Option<String>,
}

impl LookupRequest {
    pub fn new(address: impl Into<String>, listing_link: Option<&str>) -> Self {
        Self {
            address: address.into(),
            source: LOOKUP_SOURCE,
            listing_link: listing_link.map(str::to_string),
        }
    }
}

/// Body of a successful `GET /api/owner-info`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerInfoResponse {
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub mailing_address: Option<String>,
}

impl From<OwnerInfoResponse> for OwnerInfo {
    fn from(body: OwnerInfoResponse) -> Self {
        Self {
            owner_name: body.owner_name.unwrap_or_default().trim().to_string(),
            mailing_address: body.mailing_address.unwrap_or_default().trim().to_string(),
        }
    }
}

/// Result of one lookup. Callers that only merge data use
/// [`LookupOutcome::into_owner_info`], which maps failures to empty values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Resolved(OwnerInfo),
    Unresolved { reason: String },
}

impl LookupOutcome {
    pub fn unresolved(reason: impl Into<String>) -> Self {
        Self::Unresolved {
            reason: reason.into(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn into_owner_info(self) -> OwnerInfo {
        match self {
            Self::Resolved(info) => info,
            Self::Unresolved { .. } => OwnerInfo::default(),
        }
    }
}
