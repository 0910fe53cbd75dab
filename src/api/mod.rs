pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::validation::VALIDATE_URL_PATH;

pub use handlers::{HealthResponse, health_check, validate_url};

/// Routes of the local classification service.
pub fn router() -> Router {
    Router::new()
        .route(VALIDATE_URL_PATH, post(validate_url))
        .route("/healthz", get(health_check))
        .layer(TraceLayer::new_for_http())
}
