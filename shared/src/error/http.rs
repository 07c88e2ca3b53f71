//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::OrderNotFound
            | Self::OrderItemNotFound
            | Self::FoodNotFound
            | Self::MenuNotFound
            | Self::TableNotFound => StatusCode::NOT_FOUND,

            // 422: well-formed request pointing at something that does not exist
            Self::ReferenceNotFound => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (transient, client may retry)
            Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation / malformed input)
            Self::ValidationFailed | Self::MenuWindowInvalid => StatusCode::BAD_REQUEST,
        }
    }
}
