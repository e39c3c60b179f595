use model::school::School;
use sqlx::prelude::FromRow;
use utility::id::Id;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct SchoolRow {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl DatabaseRow for SchoolRow {
    type Model = School;

    fn get_id(&self) -> Id<Self::Model> {
        Id::new(self.id)
    }

    fn to_model(self) -> Self::Model {
        School {
            name: self.name,
            address: self.address,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
