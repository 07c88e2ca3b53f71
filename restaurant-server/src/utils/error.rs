//! 统一错误处理
//!
//! Re-exports the shared error system and bridges the repository layer into it.
//!
//! | RepoError | ErrorCode | HTTP |
//! |-----------|-----------|------|
//! | Validation | ValidationFailed | 400 |
//! | Reference | ReferenceNotFound | 422 |
//! | Database | DatabaseError | 500 |
//! | Timeout | TimeoutError | 503 |
//! | Encoding | InternalError | 500 |

use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Reference(resource) => AppError::reference_not_found(resource),
            RepoError::Database(msg) => {
                tracing::error!(target: "database", error = %msg, "Store operation failed");
                AppError::database("An error occurred while accessing the store")
            }
            RepoError::Timeout(op) => {
                AppError::timeout(format!("Store operation timed out: {op}"))
            }
            RepoError::Encoding(msg) => {
                tracing::error!(error = %msg, "Failed to encode value for the store");
                AppError::internal("Failed to encode value for the store")
            }
        }
    }
}

/// JSON body extractor that also runs `validator` constraints
///
/// Malformed bodies, missing required fields and constraint failures are all
/// rejected with 400 before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| AppError::validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
