//! Background scrape scheduling.
//!
//! Transmission does not only announce: it scrapes every tracker it knows
//! on a fixed cadence. This module reproduces that traffic. Each live
//! (tracker, torrent) pair owns one named task that periodically fires a
//! GET at the pre-resolved scrape URL.
//!
//! # Shape
//!
//! - Tasks are named by their identity key; adding a task under an
//!   existing name replaces the previous one, removing cancels it
//! - The first fire happens after a uniform random delay chosen at
//!   registration, so a batch of added torrents does not stampede the
//!   rate limiter
//! - All tasks share one global token bucket; each fire takes one token
//! - Task workers run on their own tokio tasks and never suspend the
//!   announce path; responses are drained and discarded, errors are
//!   logged and swallowed

/// Implementation blocks for scheduler types.
pub mod impls;

/// Scheduler data structures.
pub mod structs;

/// Unit tests for scheduling behavior.
pub mod tests;
