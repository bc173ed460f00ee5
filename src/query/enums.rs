//! Query rule enumeration.

/// Typed rules over query parameter names.
pub mod query_rule;
