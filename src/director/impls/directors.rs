use std::sync::Arc;
use reqwest::Request;
use crate::director::errors::DirectorError;
use crate::director::structs::directors::Directors;
use crate::director::traits::request_director::RequestDirector;

impl Directors {
    pub fn new(directors: Vec<Arc<dyn RequestDirector>>) -> Directors {
        Directors { directors }
    }
}

impl RequestDirector for Directors {
    /// Invokes every director in registration order.
    ///
    /// The first error aborts the chain and propagates; directors that
    /// already ran are not rolled back.
    fn direct(&self, request: &mut Request) -> Result<(), DirectorError> {
        for director in &self.directors {
            director.direct(request)?;
        }
        Ok(())
    }
}
