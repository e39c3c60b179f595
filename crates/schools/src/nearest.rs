use model::{school::School, WithDistance, WithId};

use crate::payload::Coordinates;

/// Orders `schools` by great-circle distance to `query` and keeps the first
/// `limit` of them.
///
/// The sort is stable, so schools at the same distance keep the order in which
/// they were passed in.
pub fn nearest(
    query: Coordinates,
    schools: Vec<WithId<School>>,
    limit: usize,
) -> Vec<WithDistance<WithId<School>>> {
    let mut with_distance = schools
        .into_iter()
        .map(|school| {
            school
                .content
                .with_distance_to(query.latitude, query.longitude)
                .with_id(school.id)
        })
        .collect::<Vec<_>>();
    with_distance.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    with_distance.truncate(limit);
    with_distance
}
