//! An ordered sequence of query parameters.

use crate::query::structs::query_param::QueryParam;

/// An ordered sequence of query parameters.
///
/// Order is significant: serialization emits the pairs exactly in sequence
/// order, which is what makes the output indistinguishable from a client
/// that builds its query by hand in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(pub Vec<QueryParam>);
