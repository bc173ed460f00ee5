//! The Transmission 4.0.6 rewriter.
//!
//! Transmission builds its announce query in one fixed order with fixed
//! values for `numwant`, `compact` and `supportcrypto`, and sends exactly
//! three headers. This module rewrites the host engine's announce requests
//! into that shape:
//!
//! - requests whose path ends in `scrape` pass through untouched
//! - a private tracker's prepended arguments survive the rewrite verbatim,
//!   ahead of every Transmission parameter
//! - the host engine's query is validated first, so a silent change in its
//!   behavior surfaces as an error instead of a detectable anomaly on the
//!   wire
//! - each (tracker, torrent) pair gets a generated identity on its first
//!   announce, reused until the torrent stops, and a matching scrape task
//!
//! Reference behavior: Transmission 4.0.6, `libtransmission/announcer-http.cc`.

/// Implementation blocks for the rewriter.
pub mod impls;

/// Scrape URL derivation.
pub mod scrape;

/// Rewriter data structures.
pub mod structs;
