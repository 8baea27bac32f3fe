//! Per-client rate limiting using a token bucket.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiter keyed by the peer IP address.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter that replenishes one token every
/// `period_seconds` and allows bursts of up to `burst` requests.
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The peer
/// address is read from `ConnectInfo`, so the router must be served with
/// `into_make_service_with_connect_info`.
///
/// # Errors
///
/// Returns an error if `period_seconds` or `burst` is zero.
pub fn layer(period_seconds: u64, burst: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(period_seconds)
        .burst_size(burst)
        .finish()
        .context("Rate limit requires non-zero period and burst size")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
