//! Implementation blocks for query types.

/// Rule constructors and evaluation.
pub mod query_rule;

/// Rule application, serialization and parsing for parameter sequences.
pub mod query_params;
