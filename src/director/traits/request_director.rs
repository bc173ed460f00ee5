use reqwest::Request;
use crate::director::errors::DirectorError;

/// Callback contract between the host engine and a rewriter.
///
/// Implementations mutate the outbound request in place and must complete
/// in bounded time without network I/O; the host engine calls them
/// concurrently from many tasks. Returning an error makes the engine treat
/// the request as failed.
pub trait RequestDirector: Send + Sync {
    fn direct(&self, request: &mut Request) -> Result<(), DirectorError>;
}
