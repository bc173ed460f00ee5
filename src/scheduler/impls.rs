//! Implementation blocks for scheduler types.

/// Task registration, replacement and cancellation.
pub mod scrape_scheduler;

/// The task body: rate limited fire, drain, discard.
pub mod scrape_task;
