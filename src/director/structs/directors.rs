//! Ordered chain of request directors.

use std::sync::Arc;
use crate::director::traits::request_director::RequestDirector;

/// An ordered sequence of directors applied to each outbound request.
pub struct Directors {
    pub directors: Vec<Arc<dyn RequestDirector>>,
}
