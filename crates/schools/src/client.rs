use model::{school::School, WithDistance, WithId};

use crate::{
    database::{Database, SchoolRepo},
    nearest::nearest,
    payload::{Coordinates, SchoolPayload},
    RequestResult, NEAREST_LIMIT,
};

#[derive(Debug, Clone)]
pub struct Client<D>
where
    D: Database,
{
    pub database: D,
}

impl<D> Client<D>
where
    D: Database,
{
    pub fn new(database: D) -> Self {
        Self { database }
    }

    pub async fn add_school(&self, school: School) -> RequestResult<WithId<School>> {
        let stored = self.database.auto().insert(school).await?;
        log::info!("added school {} ({})", stored.id, stored.content.name);
        Ok(stored)
    }

    /// Validates an untyped payload and stores the resulting school. Nothing is
    /// written if validation fails.
    pub async fn add_school_payload(
        &self,
        payload: SchoolPayload,
    ) -> RequestResult<WithId<School>> {
        let school = payload.validate()?;
        self.add_school(school).await
    }

    /// Returns the [`NEAREST_LIMIT`] schools closest to `query`, nearest first.
    pub async fn list_nearby(
        &self,
        query: Coordinates,
    ) -> RequestResult<Vec<WithDistance<WithId<School>>>> {
        let schools = self.database.auto().get_all().await?;
        Ok(nearest(query, schools, NEAREST_LIMIT))
    }
}
