use database::SqliteDatabase;
use model::school::School;
use schools::{
    client::Client,
    database::{Database, SchoolRepo},
    payload::Coordinates,
};

fn school(name: &str, latitude: f64, longitude: f64) -> School {
    School {
        name: name.to_owned(),
        address: format!("{name} Street 1"),
        latitude,
        longitude,
    }
}

#[tokio::test]
async fn insert_and_get_all_roundtrip() {
    let database = SqliteDatabase::in_memory().await.unwrap();

    let stored = database
        .auto()
        .insert(school("ABC School", 12.3, 45.6))
        .await
        .unwrap();
    assert_eq!(stored.content, school("ABC School", 12.3, 45.6));

    let all = database.auto().get_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, stored.id);
    assert_eq!(all[0].content, school("ABC School", 12.3, 45.6));
}

#[tokio::test]
async fn ids_are_fresh_for_duplicates() {
    let database = SqliteDatabase::in_memory().await.unwrap();

    let first = database.auto().insert(school("Same", 1.0, 2.0)).await.unwrap();
    let second = database.auto().insert(school("Same", 1.0, 2.0)).await.unwrap();

    assert!(second.id.raw() > first.id.raw());
    assert_eq!(database.auto().get_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn get_all_is_ordered_by_id() {
    let database = SqliteDatabase::in_memory().await.unwrap();
    for i in 0..5 {
        database
            .auto()
            .insert(school(&format!("School {i}"), i as f64, 0.0))
            .await
            .unwrap();
    }

    let ids = database
        .auto()
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|school| school.id.raw())
        .collect::<Vec<_>>();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn nearest_schools_from_sqlite() {
    let database = SqliteDatabase::in_memory().await.unwrap();
    let client = Client::new(database);
    for i in 0..25 {
        client
            .add_school(school(&format!("School {i}"), 12.3 + i as f64 * 0.1, 45.6))
            .await
            .unwrap();
    }

    let nearby = client
        .list_nearby(Coordinates {
            latitude: 12.3,
            longitude: 45.6,
        })
        .await
        .unwrap();

    assert_eq!(nearby.len(), 20);
    assert!(nearby[0].distance_km.abs() < 1e-3);
    assert!(nearby
        .windows(2)
        .all(|pair| pair[0].distance_km <= pair[1].distance_km));
}
