use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    #[error("query {0} not found")]
    MissingRequired(String),

    #[error("invalid query param {0}")]
    MalformedPair(String),
}
