//! The Transmission announce rewriter.

use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::identity::structs::identity_store::IdentityStore;
use crate::scheduler::structs::scrape_scheduler::ScrapeScheduler;

/// Rewrites announce requests into Transmission 4.0.6 shape.
///
/// One instance serves a whole host engine: the identity store and the
/// scrape scheduler are shared across every tracker and torrent the
/// engine announces.
pub struct TransmissionDirector {
    pub config: Arc<Configuration>,
    pub torrents: Arc<IdentityStore>,
    pub scheduler: Arc<ScrapeScheduler>,
}
