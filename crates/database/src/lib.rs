use std::{env, str::FromStr};

use async_trait::async_trait;
use model::{school::School, WithId};
use schools::database::{Database, DatabaseAutocommit, Result, SchoolRepo};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

pub mod data_model;
pub mod queries;

/// Value of `DATABASE_URL` selecting the process-local store instead of SQLite.
pub const IN_MEMORY_URL: &str = "memory";

const DEFAULT_DATABASE_URL: &str = "sqlite://schools.db";

#[derive(Debug, Clone)]
pub struct DatabaseConnectionInfo {
    pub url: String,
}

impl DatabaseConnectionInfo {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self { url: url.into() }
    }

    pub fn from_env() -> Self {
        let url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());
        Self { url }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url == IN_MEMORY_URL
    }
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("could not open database: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("could not run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[derive(Debug, Clone)]
pub struct SqliteDatabase {
    connection: SqlitePool,
}

pub struct SqliteDatabaseAutocommit {
    pool: SqlitePool,
}

impl DatabaseAutocommit for SqliteDatabaseAutocommit {}

impl SqliteDatabase {
    pub async fn connect(
        database_connection_info: DatabaseConnectionInfo,
    ) -> std::result::Result<Self, ConnectError> {
        let options = SqliteConnectOptions::from_str(&database_connection_info.url)?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::migrate(pool).await
    }

    /// Opens a fresh in-memory database. The pool holds exactly one connection
    /// that is never recycled, because the data lives only as long as it does.
    pub async fn in_memory() -> std::result::Result<Self, ConnectError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> std::result::Result<Self, ConnectError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        log::debug!("database migrations applied");
        Ok(Self { connection: pool })
    }
}

impl Database for SqliteDatabase {
    type Autocommit = SqliteDatabaseAutocommit;

    fn auto(&self) -> Self::Autocommit {
        SqliteDatabaseAutocommit {
            pool: self.connection.clone(),
        }
    }
}

#[async_trait]
impl SchoolRepo for SqliteDatabaseAutocommit {
    async fn insert(&mut self, school: School) -> Result<WithId<School>> {
        queries::school::insert(&self.pool, school).await
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<School>>> {
        queries::school::get_all(&self.pool).await
    }
}
