use serde::{Deserialize, Serialize};
use crate::config::structs::scrape_config::ScrapeConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub prefix_sentinel: String,
    pub scrape: ScrapeConfig,
}
