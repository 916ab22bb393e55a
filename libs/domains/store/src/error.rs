use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// How much driver error text survives into responses and status payloads.
pub const ERROR_DETAIL_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No document store is configured")]
    Unavailable,

    #[error("Store write failed: {0}")]
    Write(String),

    #[error("Store query failed: {0}")]
    Query(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Cap a driver error message before it reaches a client-facing payload.
/// Full details stay in the logs.
pub fn truncate_detail(message: &str) -> String {
    if message.len() <= ERROR_DETAIL_LIMIT {
        message.to_string()
    } else {
        let mut end = ERROR_DETAIL_LIMIT;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message[..end].to_string()
    }
}

/// Convert StoreError to AppError for standardized error responses.
///
/// Validation failures become 422s and are rejected before any store
/// interaction; store failures surface as opaque 500s with truncated
/// detail.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(msg) => AppError::UnprocessableEntity(msg),
            StoreError::Unavailable => {
                AppError::StoreUnavailable("no document store is configured".to_string())
            }
            StoreError::Write(msg) => AppError::StoreWrite(truncate_detail(&msg)),
            StoreError::Query(msg) => AppError::StoreQuery(truncate_detail(&msg)),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_truncate_detail_short_message() {
        assert_eq!(truncate_detail("boom"), "boom");
    }

    #[test]
    fn test_truncate_detail_long_message() {
        let long = "x".repeat(200);
        assert_eq!(truncate_detail(&long).len(), ERROR_DETAIL_LIMIT);
    }

    #[test]
    fn test_truncate_detail_respects_char_boundaries() {
        let long = "é".repeat(60);
        let truncated = truncate_detail(&long);
        assert!(truncated.len() <= ERROR_DETAIL_LIMIT);
        assert!(long.starts_with(&truncated));
    }

    #[test]
    fn test_validation_maps_to_422() {
        let response = StoreError::Validation("bad".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_store_failures_map_to_500() {
        for err in [
            StoreError::Unavailable,
            StoreError::Write("w".to_string()),
            StoreError::Query("q".to_string()),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
