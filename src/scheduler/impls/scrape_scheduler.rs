use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use dashmap::DashMap;
use governor::{Quota, RateLimiter};
use log::debug;
use rand::Rng;
use reqwest::Client;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use crate::config::structs::configuration::Configuration;
use crate::identity::structs::identity_key::IdentityKey;
use crate::scheduler::structs::scrape_scheduler::ScrapeScheduler;
use crate::scheduler::structs::scrape_task::ScrapeTask;

impl ScrapeScheduler {
    pub fn new(config: &Configuration) -> ScrapeScheduler {
        let per_second = NonZeroU32::new(config.scrape.requests_per_second.max(1)).unwrap();
        ScrapeScheduler {
            tasks: DashMap::new(),
            limiter: Arc::new(RateLimiter::direct(Quota::per_second(per_second))),
            client: Client::new(),
            interval: Duration::from_secs(config.scrape.interval),
            jitter_minimum: config.scrape.jitter_minimum,
            jitter_maximum: config.scrape.jitter_maximum,
        }
    }

    /// Registers a named task and starts its worker.
    ///
    /// A second add under the same id replaces the first: the previous
    /// worker is cancelled once the new one is registered. The initial
    /// delay is drawn at registration so torrents added together spread
    /// out instead of stampeding the rate limiter.
    pub fn add(&self, id: IdentityKey, task: ScrapeTask) {
        let cancel = CancellationToken::new();
        self.spawn_worker(id.clone(), task, cancel.clone());
        if let Some(previous) = self.tasks.insert(id, cancel) {
            previous.cancel();
        }
    }

    /// Cancels and removes a task.
    ///
    /// The worker observes the cancellation before its next fire, so the
    /// task does not fire again after this returns.
    pub fn remove(&self, id: &IdentityKey) {
        if let Some((_, cancel)) = self.tasks.remove(id) {
            cancel.cancel();
        }
    }

    pub fn contains(&self, id: &IdentityKey) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn spawn_worker(&self, id: IdentityKey, task: ScrapeTask, cancel: CancellationToken) {
        let client = self.client.clone();
        let limiter = self.limiter.clone();
        let interval = self.interval;
        let start_delay = if self.jitter_maximum > self.jitter_minimum {
            Duration::from_millis(rand::thread_rng().gen_range(self.jitter_minimum..self.jitter_maximum))
        } else {
            Duration::from_millis(self.jitter_minimum)
        };

        tokio::spawn(async move {
            let mut next_fire = Instant::now() + start_delay;
            loop {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        break;
                    }
                    _ = tokio::time::sleep_until(next_fire) => {}
                }
                if cancel.is_cancelled() {
                    break;
                }
                task.run(&client, &limiter, &cancel).await;
                next_fire += interval;
            }
            debug!("[SCRAPE] worker for {} stopped", id);
        });
    }
}
