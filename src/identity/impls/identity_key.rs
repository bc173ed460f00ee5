use std::fmt;
use std::fmt::Formatter;
use url::Url;
use crate::common::common::query_escape;
use crate::identity::structs::identity_key::IdentityKey;

impl IdentityKey {
    /// Builds the key for a request URL and a raw info hash.
    ///
    /// The URL's query is stripped; scheme, authority and path remain.
    pub fn new(request_url: &Url, info_hash: &[u8]) -> IdentityKey {
        let mut announce_url = request_url.clone();
        announce_url.set_query(None);
        IdentityKey {
            announce_url: announce_url.to_string(),
            info_hash: info_hash.to_vec(),
        }
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}--{}", self.announce_url, query_escape(&self.info_hash))
    }
}
