//! Request director trait and chaining.
//!
//! A director is the single callback a host BitTorrent engine invokes on
//! every outbound tracker HTTP request, immediately before the request is
//! sent. Directors mutate the request in place; the engine sends whatever
//! comes out.
//!
//! Multiple directors compose through [`structs::directors::Directors`]:
//! an ordered sequence invoked in registration order, short-circuiting on
//! the first error. There is no rollback; a director that already ran has
//! run.

/// Error types for director failures.
pub mod errors;

/// Implementation blocks for director chaining.
pub mod impls;

/// Director data structures.
pub mod structs;

/// The director callback trait.
pub mod traits;

/// Unit tests for director chaining.
pub mod tests;
