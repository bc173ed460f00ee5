use url::Url;
use crate::common::common::query_escape;

/// Derives the scrape URL for an announce endpoint.
///
/// By convention a tracker advertises scrape support through its announce
/// path: only a path whose final segment is `announce` has a scrape
/// counterpart, reached by swapping that segment for `scrape`. Returns
/// `None` when the tracker does not advertise scrape.
///
/// The query carries the escaped info hash, preceded by the private
/// tracker prefix when one exists.
pub fn scrape_url(announce_url: &Url, info_hash: &[u8], private_prefix: &str) -> Option<Url> {
    let path = announce_url.path();
    if !path.ends_with("/announce") {
        return None;
    }

    let mut scrape = announce_url.clone();
    let scrape_path = format!("{}scrape", &path[..path.len() - "announce".len()]);
    scrape.set_path(&scrape_path);

    let info_hash_query = format!("info_hash={}", query_escape(info_hash));
    if private_prefix.is_empty() {
        scrape.set_query(Some(&info_hash_query));
    } else {
        scrape.set_query(Some(&format!("{}&{}", private_prefix, info_hash_query)));
    }

    Some(scrape)
}
