use axum::{
    extract::{OriginalUri, Request},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use schools::RequestError;
use serde::Serialize;

pub type RouteResult<O> = Result<O, RouteErrorResponse>;

pub(crate) const NOT_FOUND_BODY: &str = "Not found";

pub(crate) async fn route_not_found(
    OriginalUri(original_uri): OriginalUri,
    req: Request,
) -> impl IntoResponse {
    log::debug!("no route for {} {}", req.method(), original_uri.path());
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// A JSON error response of the form `{"error": "..."}`.
///
/// Method, uri and details only end up in the log.
#[derive(Debug, Clone, Serialize)]
pub struct RouteErrorResponse {
    #[serde(skip)]
    pub status_code: StatusCode,

    pub error: String,

    #[serde(skip)]
    pub http_method: Option<String>,

    #[serde(skip)]
    pub requested_uri: Option<String>,

    #[serde(skip)]
    pub detailed_information: Option<String>,
}

impl RouteErrorResponse {
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            error: status_code
                .canonical_reason()
                .unwrap_or("i dunno what happened here :/")
                .to_owned(),
            http_method: None,
            requested_uri: None,
            detailed_information: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST).with_message(message)
    }

    /// Converts a request error, using `invalid_input_message` as the public
    /// message for rejected input.
    pub fn from_request_error(why: RequestError, invalid_input_message: &str) -> Self {
        match why {
            RequestError::InvalidInput(invalid) => Self::bad_request(invalid_input_message)
                .with_detailed_information(invalid.to_string()),
            RequestError::NotFound => {
                Self::new(StatusCode::NOT_FOUND).with_message(NOT_FOUND_BODY)
            }
            RequestError::Store(why) => Self::new(StatusCode::INTERNAL_SERVER_ERROR)
                .with_message("Internal server error")
                .with_detailed_information(why.to_string()),
        }
    }

    pub fn with_method(mut self, method: &Method) -> Self {
        self.http_method = Some(method.to_string());
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.requested_uri = Some(uri.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error = message.into();
        self
    }

    pub fn with_detailed_information(mut self, message: impl Into<String>) -> Self {
        self.detailed_information = Some(message.into());
        self
    }

    fn log(&self) {
        let method = self.http_method.as_deref().unwrap_or("-");
        let uri = self.requested_uri.as_deref().unwrap_or("-");
        let details = self.detailed_information.as_deref().unwrap_or(&self.error);
        if self.status_code.is_server_error() {
            log::error!("{} {} failed with {}: {}", method, uri, self.status_code, details);
        } else {
            log::warn!("{} {} rejected with {}: {}", method, uri, self.status_code, details);
        }
    }
}

impl IntoResponse for RouteErrorResponse {
    fn into_response(self) -> axum::response::Response {
        self.log();
        (self.status_code, Json(self)).into_response()
    }
}
