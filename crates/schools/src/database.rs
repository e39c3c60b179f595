use std::{error, result};

use async_trait::async_trait;
use model::{school::School, WithId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("row not found")]
    NotFound,
    #[error("{0}")]
    Other(Box<dyn error::Error + Send + Sync>),
}

pub type Result<T> = result::Result<T, DatabaseError>;

#[async_trait]
pub trait SchoolRepo {
    /// Persists a school. The store assigns a fresh id, which is never reused.
    async fn insert(&mut self, school: School) -> Result<WithId<School>>;

    /// Returns all stored schools in store iteration order (ascending id).
    async fn get_all(&mut self) -> Result<Vec<WithId<School>>>;
}

pub trait DatabaseAutocommit: SchoolRepo {}

/// trait to implement a school database.
/// multiple concurrent accesses should be possible by e.g. cloning the database object.
pub trait Database: Clone + Send + Sync + Sized + 'static {
    type Autocommit: DatabaseAutocommit + Send;

    fn auto(&self) -> Self::Autocommit;
}
