use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::error;

/// Error body returned by every record endpoint:
/// `{"title": .., "status": .., "detail": ..}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "title": self.title,
            "status": self.status.as_u16(),
            "detail": self.detail,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())),
            ServiceError::UnknownCustomer(_) => Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string())),
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(e.to_string())),
            ServiceError::Conflict(_) => Self::new(StatusCode::CONFLICT, "Conflict", Some(e.to_string())),
            ServiceError::Db(_) => {
                error!(err = %e, "database failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

/// Undecodable bodies (bad JSON, wrong content type, missing or mistyped fields).
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity", Some(rejection.body_text()))
    }
}

/// Path segments that do not parse as a record id.
impl From<PathRejection> for JsonApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(rejection.body_text()))
    }
}
