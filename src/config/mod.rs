//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the crate
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: logging verbosity for the embedding host
//! - **prefix_sentinel**: the marker that separates a private tracker's
//!   prepended query arguments from the host engine's own parameters
//! - **scrape**: cadence, jitter and rate limit of the background scrape
//!   traffic
//!
//! The camouflage literals themselves (user agent, header values, peer id
//! prefix, parameter order) are deliberately not configurable; changing any
//! of them would break the mimicry this crate exists to provide.
//!
//! # Example
//!
//! ```rust,ignore
//! use camouflage_torrent::config::structs::configuration::Configuration;
//!
//! // Generate defaults
//! let config = Configuration::init();
//!
//! // Or load from file
//! let config = Configuration::load_file("config.toml")?;
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
