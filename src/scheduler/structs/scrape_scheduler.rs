//! The task registry, rate limiter and shared HTTP client.

use std::sync::Arc;
use std::time::Duration;
use dashmap::DashMap;
use governor::DefaultDirectRateLimiter;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use crate::identity::structs::identity_key::IdentityKey;

/// Named periodic scrape tasks with a shared global rate limit.
pub struct ScrapeScheduler {
    pub tasks: DashMap<IdentityKey, CancellationToken>,
    pub limiter: Arc<DefaultDirectRateLimiter>,
    pub client: Client,
    pub interval: Duration,
    pub jitter_minimum: u64,
    pub jitter_maximum: u64,
}
