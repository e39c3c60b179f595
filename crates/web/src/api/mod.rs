use axum::{
    routing::{get, post},
    Router,
};
use schools::database::Database;

use crate::{common::route_not_found, WebState};

mod schools_api;

pub fn routes<D: Database>(state: WebState<D>) -> Router {
    Router::new()
        .route(
            "/add-school",
            post(schools_api::add_school::<D>).fallback(route_not_found),
        )
        .route(
            "/list-schools",
            get(schools_api::list_schools::<D>).fallback(route_not_found),
        )
        .with_state(state)
        .fallback(route_not_found)
}
