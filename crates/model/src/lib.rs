use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

pub mod school;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithDistance<T> {
    pub distance_km: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_km: f64, content: T) -> Self {
        Self {
            distance_km,
            content,
        }
    }

    pub fn with_id(self, id: Id<T>) -> WithDistance<WithId<T>>
    where
        T: HasId,
        T::IdType: Debug + Clone + Serialize,
    {
        WithDistance::new(self.distance_km, WithId::new(id, self.content))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}
