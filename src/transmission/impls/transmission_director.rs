use std::collections::HashMap;
use std::sync::Arc;
use log::error;
use reqwest::header;
use reqwest::header::HeaderValue;
use reqwest::Request;
use smallvec::smallvec;
use crate::common::common::{parse_query, QueryValues, EVENT_STARTED, EVENT_STOPPED};
use crate::config::structs::configuration::Configuration;
use crate::director::errors::DirectorError;
use crate::director::traits::request_director::RequestDirector;
use crate::identity::structs::identity::Identity;
use crate::identity::structs::identity_key::IdentityKey;
use crate::identity::structs::identity_store::IdentityStore;
use crate::query::enums::query_rule::QueryRule;
use crate::query::errors::QueryError;
use crate::query::structs::query_params::QueryParams;
use crate::scheduler::structs::scrape_scheduler::ScrapeScheduler;
use crate::scheduler::structs::scrape_task::ScrapeTask;
use crate::transmission::scrape::scrape_url;
use crate::transmission::structs::transmission_director::TransmissionDirector;

/// The user agent Transmission 4.0.6 sends on every tracker request.
pub const USER_AGENT: &str = "Transmission/4.0.6";

/// The accepted encodings Transmission 4.0.6 advertises.
pub const ACCEPT_ENCODING: &str = "deflate, gzip, br, zstd";

/// The accept header Transmission 4.0.6 sends.
pub const ACCEPT: &str = "*/*";

impl TransmissionDirector {
    pub fn new(config: Arc<Configuration>) -> TransmissionDirector {
        let scheduler = Arc::new(ScrapeScheduler::new(&config));
        TransmissionDirector {
            config,
            torrents: Arc::new(IdentityStore::new()),
            scheduler,
        }
    }

    fn modify_query(&self, request: &mut Request) -> Result<(), DirectorError> {
        let raw_query = request.url().query().unwrap_or("").to_string();

        // A private tracker's arguments are prepended by the host engine
        // before its own parameters, which start at the sentinel. Everything
        // ahead of it is preserved verbatim, never re-encoded or reordered.
        let private_prefix = match raw_query.find(self.config.prefix_sentinel.as_str()) {
            Some(index) => raw_query[..index].to_string(),
            None => String::new(),
        };

        let mut query = parse_query(Some(raw_query))
            .map_err(|e| DirectorError::Validation(e.message))?;

        // Transmission uses fixed values for numwant, compact and
        // supportcrypto. The host engine is expected to omit the first and
        // pin the other two; a mismatch means its behavior changed under us
        // and the rewrite would no longer be faithful.
        if query.contains_key("numwant") {
            return Err(DirectorError::Validation("host engine provides numwant".to_string()));
        }
        if first_value(&query, "compact") != Some(b"1".as_slice()) {
            return Err(DirectorError::Validation("host engine provides compact!=1".to_string()));
        }
        if first_value(&query, "supportcrypto") != Some(b"1".as_slice()) {
            return Err(DirectorError::Validation("host engine provides supportcrypto!=1".to_string()));
        }

        let info_hash = match first_value(&query, "info_hash") {
            Some(value) if !value.is_empty() => value.to_vec(),
            _ => return Err(DirectorError::Validation("missing info_hash".to_string())),
        };
        let event = first_value(&query, "event").unwrap_or_default().to_vec();

        // The rule list below also requires these; establish their presence
        // before any identity is stored, so a malformed announce fails
        // without leaving state behind.
        for name in ["port", "uploaded", "downloaded", "left"] {
            if !query.contains_key(name) {
                return Err(QueryError::MissingRequired(name.to_string()).into());
            }
        }

        let id = IdentityKey::new(request.url(), &info_hash);
        let (identity, existed) = self.torrents.get_or_create(&id, Identity::generate);
        if event == EVENT_STARTED.as_bytes() {
            // A start on a live identity means the host engine skipped the
            // stop. The announce still goes out with the stored identity.
            if existed {
                error!("start a torrent already started");
            }
        } else if event == EVENT_STOPPED.as_bytes() {
            self.torrents.remove(&id);
            self.scheduler.remove(&id);
        }
        // An announce without a preceding start is normal, e.g. when
        // resuming a finished torrent for seeding.

        if !existed && event != EVENT_STOPPED.as_bytes() {
            if let Some(scrape) = scrape_url(request.url(), &info_hash, &private_prefix) {
                self.scheduler.add(id.clone(), ScrapeTask::new(scrape));
            }
        }

        query.insert("numwant".to_string(), smallvec![b"80".to_vec()]);
        query.insert("peer_id".to_string(), smallvec![identity.peer_id.into_bytes()]);
        query.insert("key".to_string(), smallvec![identity.key.into_bytes()]);

        let rules = [
            QueryRule::required("info_hash"),
            QueryRule::required("peer_id"),
            QueryRule::required("port"),
            QueryRule::required("uploaded"),
            QueryRule::required("downloaded"),
            QueryRule::required("left"),
            QueryRule::required("numwant"),
            QueryRule::required("key"),
            QueryRule::required("compact"),
            QueryRule::required("supportcrypto"),
            QueryRule::optional("requirecrypto"),
            QueryRule::optional("event"),
            QueryRule::optional("corrupt"),
            QueryRule::optional("trackerid"),
        ];
        let params = QueryParams::apply(&rules, &query)?;

        let serialized = params.serialize();
        if private_prefix.is_empty() {
            request.url_mut().set_query(Some(&serialized));
        } else {
            request.url_mut().set_query(Some(&format!("{}&{}", private_prefix, serialized)));
        }

        Ok(())
    }
}

impl RequestDirector for TransmissionDirector {
    fn direct(&self, request: &mut Request) -> Result<(), DirectorError> {
        // Scrape requests pass through untouched. The host engine does not
        // currently route them through this callback; the guard keeps that
        // assumption from silently breaking.
        let is_scrape = request
            .url()
            .path_segments()
            .map(|segments| segments.last() == Some("scrape"))
            .unwrap_or(false);
        if is_scrape {
            return Ok(());
        }

        self.modify_query(request)?;
        modify_headers(request);
        Ok(())
    }
}

fn modify_headers(request: &mut Request) {
    let headers = request.headers_mut();
    headers.clear();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING));
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
}

fn first_value<'a>(query: &'a HashMap<String, QueryValues>, name: &str) -> Option<&'a [u8]> {
    query.get(name).and_then(|values| values.first()).map(|value| value.as_slice())
}
