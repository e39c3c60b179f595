use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{OriginalUri, Query, State},
    http::{header, HeaderMap, Method, StatusCode},
    Json,
};
use model::{school::School, WithDistance, WithId};
use schools::{
    database::Database,
    payload::{Coordinates, SchoolPayload},
    RequestError,
};
use serde::Serialize;

use crate::{
    common::{RouteErrorResponse, RouteResult},
    WebState,
};

const INVALID_FIELDS: &str = "Missing or invalid fields";
const INVALID_COORDINATES: &str = "Missing or invalid latitude/longitude";

#[derive(Debug, Serialize)]
pub(crate) struct AddSchoolResponse {
    message: &'static str,
    id: i64,
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.contains("application/json"))
}

/// Accepts a school as JSON body, or as query parameters when the request is
/// not declared as JSON.
pub(crate) async fn add_school<D: Database>(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { school_client }): State<WebState<D>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> RouteResult<(StatusCode, Json<AddSchoolResponse>)> {
    let payload = if is_json(&headers) {
        SchoolPayload::from_json(&body).map_err(RequestError::from)
    } else {
        Ok(SchoolPayload::from_query(params))
    };

    let result = match payload {
        Ok(payload) => school_client.add_school_payload(payload).await,
        Err(why) => Err(why),
    };

    result
        .map(|school| {
            (
                StatusCode::CREATED,
                Json(AddSchoolResponse {
                    message: "School added successfully",
                    id: school.id.raw(),
                }),
            )
        })
        .map_err(|why| {
            RouteErrorResponse::from_request_error(why, INVALID_FIELDS)
                .with_method(&Method::POST)
                .with_uri(original_uri.path())
        })
}

pub(crate) async fn list_schools<D: Database>(
    OriginalUri(original_uri): OriginalUri,
    State(WebState { school_client }): State<WebState<D>>,
    Query(params): Query<HashMap<String, String>>,
) -> RouteResult<Json<Vec<WithDistance<WithId<School>>>>> {
    let map_error = |why: RequestError| {
        RouteErrorResponse::from_request_error(why, INVALID_COORDINATES)
            .with_method(&Method::GET)
            .with_uri(original_uri.path())
    };

    let query = Coordinates::parse(
        params.get("latitude").map(String::as_str),
        params.get("longitude").map(String::as_str),
    )
    .map_err(|why| map_error(why.into()))?;

    school_client
        .list_nearby(query)
        .await
        .map(Json)
        .map_err(map_error)
}
