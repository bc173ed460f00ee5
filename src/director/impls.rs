//! Implementation blocks for director chaining.

/// Chain construction and sequential invocation.
pub mod directors;
