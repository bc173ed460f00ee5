#[cfg(test)]
mod scheduler_tests {
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio_util::sync::CancellationToken;
    use url::Url;
    use crate::config::structs::configuration::Configuration;
    use crate::identity::structs::identity_key::IdentityKey;
    use crate::scheduler::structs::scrape_scheduler::ScrapeScheduler;
    use crate::scheduler::structs::scrape_task::ScrapeTask;

    fn test_config() -> Configuration {
        let mut config = Configuration::init();
        // Keep the first fire far away; these tests only exercise membership.
        config.scrape.jitter_minimum = 60_000;
        config.scrape.jitter_maximum = 120_000;
        config
    }

    fn task_for(url: &str) -> ScrapeTask {
        ScrapeTask::new(Url::parse(url).unwrap())
    }

    fn key_for(announce: &str) -> IdentityKey {
        IdentityKey::new(&Url::parse(announce).unwrap(), b"hash")
    }

    #[tokio::test]
    async fn test_add_and_contains() {
        let scheduler = ScrapeScheduler::new(&test_config());
        let id = key_for("http://example.com/announce");

        assert!(!scheduler.contains(&id));
        scheduler.add(id.clone(), task_for("http://example.com/scrape?info_hash=abc"));
        assert!(scheduler.contains(&id));
        assert_eq!(scheduler.len(), 1);
    }

    #[tokio::test]
    async fn test_add_same_id_replaces() {
        let scheduler = ScrapeScheduler::new(&test_config());
        let id = key_for("http://example.com/announce");

        scheduler.add(id.clone(), task_for("http://example.com/scrape?info_hash=abc"));
        scheduler.add(id.clone(), task_for("http://example.com/scrape?info_hash=def"));

        assert_eq!(scheduler.len(), 1, "a second add for the same id replaces the first");
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let scheduler = ScrapeScheduler::new(&test_config());
        let id = key_for("http://example.com/announce");

        scheduler.add(id.clone(), task_for("http://example.com/scrape?info_hash=abc"));
        scheduler.remove(&id);
        scheduler.remove(&id);

        assert!(!scheduler.contains(&id));
        assert!(scheduler.is_empty());
    }

    #[tokio::test]
    async fn test_distinct_ids_are_distinct_tasks() {
        let scheduler = ScrapeScheduler::new(&test_config());
        let first = key_for("http://t1.example.com/announce");
        let second = key_for("http://t2.example.com/announce");

        scheduler.add(first.clone(), task_for("http://t1.example.com/scrape?info_hash=abc"));
        scheduler.add(second.clone(), task_for("http://t2.example.com/scrape?info_hash=abc"));

        assert_eq!(scheduler.len(), 2);
        scheduler.remove(&first);
        assert!(!scheduler.contains(&first));
        assert!(scheduler.contains(&second));
    }

    #[tokio::test]
    async fn test_run_honors_cancellation_before_fire() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let scheduler = ScrapeScheduler::new(&test_config());
        let task = task_for(&format!("http://{}/scrape?info_hash=abc", addr));
        let cancel = CancellationToken::new();
        cancel.cancel();

        task.run(&scheduler.client, &scheduler.limiter, &cancel).await;

        let accepted = tokio::time::timeout(Duration::from_millis(200), listener.accept()).await;
        assert!(accepted.is_err(), "a cancelled task must not reach the tracker");
    }

    #[tokio::test]
    async fn test_run_swallows_transport_errors() {
        let scheduler = ScrapeScheduler::new(&test_config());
        // Nothing listens here; the connection is refused and the error is
        // logged and swallowed.
        let task = task_for("http://127.0.0.1:9/scrape?info_hash=abc");
        let cancel = CancellationToken::new();

        task.run(&scheduler.client, &scheduler.limiter, &cancel).await;
    }
}
