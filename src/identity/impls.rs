//! Implementation blocks for identity types.

/// Identity generation.
pub mod identity;

/// Key construction and canonical rendering.
pub mod identity_key;

/// Atomic store operations.
pub mod identity_store;
