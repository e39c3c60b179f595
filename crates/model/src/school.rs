use serde::{Deserialize, Serialize};
use utility::{geo, id::HasId};

use crate::WithDistance;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl School {
    pub fn distance_to(&self, latitude: f64, longitude: f64) -> f64 {
        geo::spherical_distance(latitude, longitude, self.latitude, self.longitude)
    }

    pub fn with_distance_to(self, latitude: f64, longitude: f64) -> WithDistance<School> {
        let distance = self.distance_to(latitude, longitude);
        WithDistance::new(distance, self)
    }
}

impl HasId for School {
    type IdType = i64;
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use utility::id::Id;

    use super::*;

    fn abc_school() -> School {
        School {
            name: "ABC School".to_owned(),
            address: "123 Main St".to_owned(),
            latitude: 12.3,
            longitude: 45.6,
        }
    }

    #[test]
    fn serializes_flat_with_id_and_distance() {
        let value = abc_school().with_distance_to(12.3, 45.6).with_id(Id::new(7));
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["id"], json!(7));
        assert_eq!(json["name"], json!("ABC School"));
        assert_eq!(json["address"], json!("123 Main St"));
        assert_eq!(json["latitude"], json!(12.3));
        assert_eq!(json["longitude"], json!(45.6));
        assert!(json["distance_km"].as_f64().unwrap().abs() < 1e-3);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
