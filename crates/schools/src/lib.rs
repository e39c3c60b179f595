use thiserror::Error;

pub mod client;
pub mod database;
pub mod memory;
pub mod nearest;
pub mod payload;

/// Maximum number of schools returned by a nearest-neighbor lookup.
pub const NEAREST_LIMIT: usize = 20;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] payload::InvalidInput),
    #[error("not found")]
    NotFound,
    #[error("store failure: {0}")]
    Store(database::DatabaseError),
}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::NotFound => Self::NotFound,
            other => Self::Store(other),
        }
    }
}

pub type RequestResult<O> = Result<O, RequestError>;
