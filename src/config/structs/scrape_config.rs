use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScrapeConfig {
    pub interval: u64,
    pub jitter_minimum: u64,
    pub jitter_maximum: u64,
    pub requests_per_second: u32,
}
