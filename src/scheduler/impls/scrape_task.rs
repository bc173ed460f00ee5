use governor::DefaultDirectRateLimiter;
use log::{error, info};
use reqwest::header;
use reqwest::header::HeaderValue;
use reqwest::Client;
use tokio_util::sync::CancellationToken;
use url::Url;
use crate::scheduler::structs::scrape_task::ScrapeTask;
use crate::transmission::impls::transmission_director::{ACCEPT, ACCEPT_ENCODING, USER_AGENT};

impl ScrapeTask {
    pub fn new(scrape_url: Url) -> ScrapeTask {
        ScrapeTask { scrape_url }
    }

    /// Fires one scrape request.
    ///
    /// Waits for a rate limiter token first; cancellation is honored at
    /// that wait and is best effort once the request is in flight. The
    /// response body is drained to hand the connection back to the pool
    /// and then discarded. Errors are logged and swallowed; the task
    /// retries at its next scheduled interval.
    pub async fn run(&self, client: &Client, limiter: &DefaultDirectRateLimiter, cancel: &CancellationToken) {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return;
            }
            _ = limiter.until_ready() => {}
        }

        let request = match client
            .get(self.scrape_url.clone())
            .header(header::USER_AGENT, HeaderValue::from_static(USER_AGENT))
            .header(header::ACCEPT_ENCODING, HeaderValue::from_static(ACCEPT_ENCODING))
            .header(header::ACCEPT, HeaderValue::from_static(ACCEPT))
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                error!("[SCRAPE] failed to build request for {}: {}", self.scrape_url, e);
                return;
            }
        };

        match client.execute(request).await {
            Ok(response) => {
                let _ = response.bytes().await;
            }
            Err(e) => {
                info!("[SCRAPE] request failed for {}: {}", self.scrape_url, e);
            }
        }
    }
}
