//! Implementation blocks for common types.

/// Implementations for `CustomError`.
pub mod custom_error;
