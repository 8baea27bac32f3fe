//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /get/{code}` - Short link redirect
//! - `POST /shorten`    - Link creation
//! - `GET  /health`     - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let rate_limit = rate_limit::layer(config.rate_limit_period_seconds, config.rate_limit_burst)?;

    let router = api::routes::routes()
        .layer(rate_limit)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
