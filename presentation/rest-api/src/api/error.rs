use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};
use serde::Serialize;

/// Failure envelope: `{ "success": false, "message": "..." }`
#[derive(Object, Serialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Converts errors raised by the framework itself (unknown route, unreadable
/// body, wrong content type) into the failure envelope.
pub async fn error_envelope(err: poem::Error) -> Response {
    let status = err.status();
    let message = if status == StatusCode::NOT_FOUND {
        "API endpoint not found".to_string()
    } else if status.is_server_error() {
        tracing::error!("Unhandled API error: {}", err);
        "Server Error".to_string()
    } else {
        err.to_string()
    };

    (status, poem::web::Json(ErrorResponse::new(message))).into_response()
}
