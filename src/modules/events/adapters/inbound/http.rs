// HTTP error mapping shared by every inbound handler: one body shape,
// one status per error variant.

use crate::modules::events::application::errors::EventApiError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

pub fn error_response(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> Response {
    (
        status,
        Json(ErrorBody {
            code,
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for EventApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            EventApiError::MissingField(_) | EventApiError::MissingId => StatusCode::BAD_REQUEST,
            EventApiError::InvalidId | EventApiError::NotFound => StatusCode::NOT_FOUND,
            EventApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.code(), self.to_string())
    }
}
