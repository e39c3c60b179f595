use model::{school::School, WithId};
use schools::database::Result;
use sqlx::{Executor, Sqlite};
use utility::let_also::LetAlso;

use crate::data_model::{school::SchoolRow, with_id, with_ids};

use super::convert_error;

pub async fn insert<'c, E>(executor: E, school: School) -> Result<WithId<School>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        INSERT INTO schools(
            name,
            address,
            latitude,
            longitude
        )
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, name, address, latitude, longitude;
        ",
    )
    .bind(school.name)
    .bind(school.address)
    .bind(school.latitude)
    .bind(school.longitude)
    .fetch_one(executor)
    .await
    .map_err(convert_error)
    .map(|row: SchoolRow| with_id(row))
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<School>>>
where
    E: Executor<'c, Database = Sqlite>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, address, latitude, longitude
        FROM
            schools
        ORDER BY id ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map_err(convert_error)?
    .let_owned(|schools: Vec<SchoolRow>| Ok(with_ids(schools)))
}
