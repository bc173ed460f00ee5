//! Typed query model.
//!
//! Tracker announce queries are fingerprintable: the set, order and encoding
//! of the parameters differ between client implementations. This module
//! models a query as an ordered sequence of name/value pairs produced by a
//! declared rule list, so a rewriter can emit parameters in one exact order
//! with one exact encoding.
//!
//! # Semantics
//!
//! - `QueryRule::Required(name)` fails when the input has no value for
//!   `name`
//! - `QueryRule::Optional(name)` is dropped when absent
//! - `QueryRule::Fixed(name, value)` always emits its constant
//!
//! Values are raw bytes: `info_hash` is a 20-byte digest and is generally
//! not valid UTF-8. Serialization uses the query-component form in which
//! space encodes as `+` and everything outside `[A-Za-z0-9-_.~]` as `%HH`.
//!
//! # Example
//!
//! ```rust,ignore
//! use camouflage_torrent::query::enums::query_rule::QueryRule;
//! use camouflage_torrent::query::structs::query_params::QueryParams;
//!
//! let rules = vec![
//!     QueryRule::required("info_hash"),
//!     QueryRule::optional("event"),
//! ];
//! let params = QueryParams::apply(&rules, &input)?;
//! let wire = params.serialize();
//! ```

/// Query rule enumeration (required, optional, fixed).
pub mod enums;

/// Error types for rule application and parsing.
pub mod errors;

/// Implementation blocks for query types.
pub mod impls;

/// Query data structures.
pub mod structs;
