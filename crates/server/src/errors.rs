use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::model_state::CUSTOM_ERROR_KEY;
use common::ModelState;
use serde_json::json;
use service::errors::ServiceError;
use tracing::error;

pub const VALIDATION_TITLE: &str = "One or more validation errors occurred.";

/// Error body returned by every handler.
///
/// With `errors` set it renders as a validation problem
/// (`{"title","status","errors"}`), otherwise as `{"error","detail"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: String,
    pub detail: Option<String>,
    pub errors: Option<ModelState>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, title: title.into(), detail, errors: None }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(detail.into()))
    }

    pub fn validation(errors: ModelState) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            title: VALIDATION_TITLE.into(),
            detail: None,
            errors: Some(errors),
        }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::BadInput(msg) => JsonApiError::bad_request(msg),
            ServiceError::Validation(state) => JsonApiError::validation(state),
            ServiceError::DuplicateName => JsonApiError::validation(ModelState::with_error(
                CUSTOM_ERROR_KEY,
                ServiceError::DuplicateName.to_string(),
            )),
            ServiceError::NotFound(msg) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            e @ (ServiceError::Db(_) | ServiceError::Model(_)) => {
                error!(err = %e, "villa request failed");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string()))
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rej: JsonRejection) -> Self {
        JsonApiError::bad_request(rej.body_text())
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(rej: PathRejection) -> Self {
        JsonApiError::bad_request(rej.body_text())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = match self.errors {
            Some(errors) => json!({
                "title": self.title,
                "status": self.status.as_u16(),
                "errors": errors,
            }),
            None => json!({"error": self.title, "detail": self.detail}),
        };
        (self.status, Json(body)).into_response()
    }
}
