//! Implementation blocks for configuration types.

/// Loading, saving and default generation for `Configuration`.
pub mod configuration;

/// Display and error trait implementations for `ConfigurationError`.
pub mod configuration_error;
