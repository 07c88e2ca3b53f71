//! Shared types for the restaurant service
//!
//! Models, request types, the error system and small utilities used by the
//! server and by API clients.

pub mod error;
pub mod models;
pub mod request;
pub mod serde_helpers;
pub mod types;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use http;
pub use request::PaginationQuery;
pub use serde::{Deserialize, Serialize};
