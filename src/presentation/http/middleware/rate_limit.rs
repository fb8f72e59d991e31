// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type ContactRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client allowance on the contact relay: one token replenished every
/// `replenish_every`, at most `burst` submissions in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRateLimit {
    pub replenish_every: Duration,
    pub burst: u32,
}

impl Default for ContactRateLimit {
    fn default() -> Self {
        Self {
            replenish_every: Duration::from_secs(10),
            burst: 3,
        }
    }
}

/// `None` when the allowance is zero in either dimension, which governor
/// refuses to build.
pub fn contact_rate_limit_layer(limit: ContactRateLimit) -> Option<ContactRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.period(limit.replenish_every);
    builder.burst_size(limit.burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}
