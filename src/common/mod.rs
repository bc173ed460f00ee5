//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the crate.
//!
//! # Utilities
//!
//! - Query-component escaping and unescaping over raw bytes
//! - Lenient query string parsing into a name/values map
//! - Logging setup
//! - Announce event constants
//!
//! # Data Structures
//!
//! - `CustomError` - String error type for utility-level failures
//!
//! # Example
//!
//! ```rust,ignore
//! use camouflage_torrent::common::common::{parse_query, query_escape};
//!
//! // Parse a raw announce query into a map
//! let params = parse_query(Some("info_hash=%AB%CD&compact=1".to_string()))?;
//!
//! // Escape raw bytes for a query component
//! let escaped = query_escape(b"\xab\xcd ");
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
