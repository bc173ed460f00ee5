//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Background scrape traffic settings (cadence, jitter, rate limit).
pub mod scrape_config;
