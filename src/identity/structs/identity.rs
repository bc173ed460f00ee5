//! A generated (peer_id, key) pair.

/// The identity a torrent presents to one tracker.
///
/// Both fields are generated once and then reused verbatim for every
/// announce until the torrent stops; a tracker correlates announces
/// through them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub peer_id: String,
    pub key: String,
}
