//! The (announce base URL, info hash) pair identities are scoped by.

/// Scoping key for stored identities and scheduled scrape tasks.
///
/// `announce_url` is the request URL with its query stripped, so two
/// trackers on the same host but different paths are distinct keys. The
/// info hash is kept as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    pub announce_url: String,
    pub info_hash: Vec<u8>,
}
