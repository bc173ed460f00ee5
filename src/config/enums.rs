//! Configuration enumerations.

/// Errors raised while loading or saving configuration.
pub mod configuration_error;
