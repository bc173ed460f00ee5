//! A pre-resolved scrape request fired on a schedule.

use url::Url;

/// One scheduled scrape.
///
/// The URL is resolved once at registration from the announce URL, the
/// info hash and any private tracker prefix; the task never consults the
/// identity store afterwards, so a fire racing a concurrent stop is
/// harmless.
#[derive(Debug, Clone)]
pub struct ScrapeTask {
    pub scrape_url: Url,
}
