//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `GET  /get/{code}` - Redirect to the stored URL (301)
/// - `POST /shorten`    - Store a URL from the `link` form field, respond with its code
/// - `GET  /health`     - Storage health check
///
/// Any other method on these paths is answered with `405 Method Not Allowed`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/get/{code}", get(redirect_handler))
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
}
