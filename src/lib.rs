//! # Camouflage-Torrent
//!
//! A client-side interceptor that makes the tracker HTTP traffic of a host
//! BitTorrent engine indistinguishable from the reference Transmission 4.0.6
//! client.
//!
//! ## Overview
//!
//! BitTorrent trackers fingerprint clients through the shape of their
//! announce requests: the exact set, order and encoding of the query
//! parameters, the identity formats (`peer_id`, `key`) and the HTTP headers.
//! This crate plugs into a host engine as a request director, a callback
//! invoked on every outbound tracker request just before it is sent, and
//! rewrites announces so they match Transmission byte for byte. It also runs
//! the background scrape traffic Transmission would produce, so the tracker
//! sees the full behavioral profile, not just well-formed announces.
//!
//! ## Features
//!
//! - **Announce Rewriting**: strict parameter ordering, fixed `numwant`,
//!   wholesale header replacement, private-tracker prefix preservation
//! - **Per-Torrent Identity**: Transmission-format `peer_id` and `key`
//!   generated per (tracker, torrent) pair and reused until stop
//! - **Scrape Scheduling**: periodic, jittered, globally rate-limited
//!   scrape requests derived from each live announce endpoint
//! - **Director Chaining**: multiple rewriters composed in order with
//!   first-error short-circuit
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use camouflage_torrent::config::structs::configuration::Configuration;
//! use camouflage_torrent::director::traits::request_director::RequestDirector;
//! use camouflage_torrent::transmission::structs::transmission_director::TransmissionDirector;
//!
//! let config = Arc::new(Configuration::init());
//! let director = TransmissionDirector::new(config);
//!
//! // Host engine, for every outbound tracker request:
//! director.direct(&mut request)?;
//! client.execute(request).await?;
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Shared utilities, query escaping, and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`director`] - Request director trait and ordered chaining
//! - [`identity`] - Per-torrent identity generation and storage
//! - [`query`] - Typed query rules and canonical serialization
//! - [`scheduler`] - Background scrape task scheduling and rate limiting
//! - [`transmission`] - The Transmission 4.0.6 announce rewriter

/// Common utilities and shared functionality.
///
/// Contains helper functions for query escaping and parsing, logging setup,
/// error handling, and the announce event constants used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
/// Carries the private-prefix sentinel and the scrape cadence settings.
pub mod config;

/// Request director trait and chaining.
///
/// Defines the callback contract between the host engine and the rewriters,
/// and the ordered chain that composes multiple rewriters.
pub mod director;

/// Per-torrent identity management.
///
/// Generates Transmission-format peer identifiers and keys, and stores them
/// per (tracker, torrent) pair in a concurrent map.
pub mod identity;

/// Typed query model.
///
/// Ordered query parameters with required/optional/fixed rules, canonical
/// query-component serialization and a strict parser.
pub mod query;

/// Background scrape scheduling.
///
/// Named periodic tasks with jittered start times and a shared global
/// token-bucket rate limit, firing scrape requests independently of the
/// announce path.
pub mod scheduler;

/// The Transmission 4.0.6 rewriter.
///
/// Classifies tracker requests, validates the host engine's query, assigns
/// identities, re-emits the announce query in Transmission's fixed order and
/// replaces the header set.
pub mod transmission;
