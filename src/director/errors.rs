use thiserror::Error;
use crate::query::errors::QueryError;

#[derive(Error, Debug)]
pub enum DirectorError {
    #[error("announce validation failed: {0}")]
    Validation(String),

    #[error("query processing failed: {0}")]
    Query(#[from] QueryError),
}
