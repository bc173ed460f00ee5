//! Per-torrent identity management.
//!
//! Transmission identifies itself to a tracker through a `peer_id` and a
//! `key` whose formats are recognizable. This module generates identities
//! in exactly that format and stores one per (tracker, torrent) pair.
//!
//! # Identity format
//!
//! - `peer_id`: the 8-byte prefix `-TR4060-` followed by 12 characters
//!   drawn uniformly from `[0-9a-z]`, 20 bytes total
//! - `key`: a cryptographically random 32-bit value rendered as 8
//!   uppercase hexadecimal characters
//!
//! # Lifecycle
//!
//! An identity is created by the first announce for its key, reused
//! verbatim by every following announce, and deleted when the torrent
//! stops. Distinct trackers get distinct identities even for the same
//! torrent: the store is keyed by the pair (announce base URL, info hash).

/// Identity data structures (identity, key, store).
pub mod structs;

/// Implementation blocks for identity types.
pub mod impls;
