use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::platform::{Platform, classify, validate_format};
use crate::validation::{ErrorResponse, ValidateUrlRequest, ValidateUrlResponse};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}

fn bad_request(error: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
}

/// Classify a listing URL. `expected_platform` is accepted but not checked
/// here; callers reconcile it against the answer.
pub async fn validate_url(Json(payload): Json<ValidateUrlRequest>) -> Response {
    let url = payload.url.trim();

    if let Err(e) = validate_format(url) {
        warn!("rejected url {:?}: {}", url, e);
        return bad_request(e.to_string());
    }

    let Some(found) = classify(url) else {
        let supported = Platform::ALL
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        warn!("no platform matched url {:?}", url);
        return bad_request(format!("Unsupported platform. Supported: {supported}"));
    };

    info!(platform = %found.platform, table = found.table, "classified url");

    (
        StatusCode::OK,
        Json(ValidateUrlResponse {
            platform: Some(found.platform.to_string()),
            table: Some(found.table.to_string()),
            location: Some(found.location),
        }),
    )
        .into_response()
}
