use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    response::Response,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::CorsConfig;

pub const ALLOW_METHODS: [Method; 4] =
    [Method::GET, Method::HEAD, Method::POST, Method::OPTIONS];

pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = if config.allow_origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(config.allow_origin.clone())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOW_METHODS)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age_secs))
}

/// `CorsLayer` answers preflights with 200; they are reported as 204 instead.
/// Only preflight responses carry `Access-Control-Allow-Methods`.
pub async fn preflight_no_content(mut response: Response) -> Response {
    if response.status() == StatusCode::OK
        && response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS)
    {
        *response.status_mut() = StatusCode::NO_CONTENT;
    }
    response
}
