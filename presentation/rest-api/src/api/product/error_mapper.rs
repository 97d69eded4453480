use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::MissingFields => (StatusCode::BAD_REQUEST, "Please provide all fields"),
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "Price must be a non-negative number",
            ),
            ProductError::EmptyField => (StatusCode::BAD_REQUEST, "Fields cannot be empty"),
            ProductError::EmptyPatch => (
                StatusCode::BAD_REQUEST,
                "Please provide at least one field to update",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            ProductError::Repository(e) => {
                tracing::error!("Storage failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error")
            }
        };

        (status, Json(ErrorResponse::new(message)))
    }
}
