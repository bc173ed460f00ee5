#[cfg(test)]
mod director_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use reqwest::{Method, Request};
    use url::Url;
    use crate::director::errors::DirectorError;
    use crate::director::structs::directors::Directors;
    use crate::director::traits::request_director::RequestDirector;

    struct CountingDirector {
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl RequestDirector for CountingDirector {
        fn direct(&self, _request: &mut Request) -> Result<(), DirectorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DirectorError::Validation("broken".to_string()));
            }
            Ok(())
        }
    }

    fn test_request() -> Request {
        Request::new(Method::GET, Url::parse("http://example.com/announce?compact=1").unwrap())
    }

    #[test]
    fn test_chain_runs_all_in_order() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));
        let chain = Directors::new(vec![
            Arc::new(CountingDirector { calls: first_calls.clone(), fail: false }),
            Arc::new(CountingDirector { calls: second_calls.clone(), fail: false }),
        ]);

        let mut request = test_request();
        chain.direct(&mut request).unwrap();

        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_chain_short_circuits_on_error() {
        let first_calls = Arc::new(AtomicUsize::new(0));
        let second_calls = Arc::new(AtomicUsize::new(0));
        let chain = Directors::new(vec![
            Arc::new(CountingDirector { calls: first_calls.clone(), fail: true }),
            Arc::new(CountingDirector { calls: second_calls.clone(), fail: false }),
        ]);

        let mut request = test_request();
        let result = chain.direct(&mut request);

        assert!(matches!(result, Err(DirectorError::Validation(_))));
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 0, "directors after the error must not run");
    }

    #[test]
    fn test_empty_chain_is_a_no_op() {
        let chain = Directors::new(Vec::new());
        let mut request = test_request();
        chain.direct(&mut request).unwrap();
        assert_eq!(request.url().as_str(), "http://example.com/announce?compact=1");
    }
}
