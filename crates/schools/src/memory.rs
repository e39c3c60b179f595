use std::sync::Arc;

use async_trait::async_trait;
use model::{school::School, WithId};
use tokio::sync::RwLock;
use utility::id::Id;

use crate::database::{Database, DatabaseAutocommit, Result, SchoolRepo};

#[derive(Debug, Default)]
struct MemoryStore {
    last_id: i64,
    schools: Vec<WithId<School>>,
}

/// A process-local store, mainly for tests. Ids start at 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct InMemoryAutocommit {
    store: Arc<RwLock<MemoryStore>>,
}

impl DatabaseAutocommit for InMemoryAutocommit {}

impl Database for InMemoryDatabase {
    type Autocommit = InMemoryAutocommit;

    fn auto(&self) -> Self::Autocommit {
        InMemoryAutocommit {
            store: self.store.clone(),
        }
    }
}

#[async_trait]
impl SchoolRepo for InMemoryAutocommit {
    async fn insert(&mut self, school: School) -> Result<WithId<School>> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let stored = WithId::new(Id::new(store.last_id), school);
        store.schools.push(stored.clone());
        Ok(stored)
    }

    async fn get_all(&mut self) -> Result<Vec<WithId<School>>> {
        Ok(self.store.read().await.schools.clone())
    }
}
