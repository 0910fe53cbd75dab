use serde::{Deserialize, Serialize};

use crate::platform::{Location, Platform};

/// Body of `POST /api/validate-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateUrlRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_platform: Option<String>,
}

/// Successful answer of the classification service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateUrlResponse {
    pub platform: Option<String>,
    pub table: Option<String>,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Outcome of validating a candidate listing URL.
///
/// `is_valid` holds only when a platform was detected and, if the caller
/// named an expected platform, it is that one. On a mismatch the detected
/// platform, table and location are still filled in for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDetectionResult {
    pub platform: Option<Platform>,
    pub table: Option<String>,
    pub location: Location,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlatformDetectionResult {
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            platform: None,
            table: None,
            location: Location::default(),
            is_valid: false,
            error: Some(error.into()),
        }
    }
}
