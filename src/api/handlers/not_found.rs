use crate::error::AppError;

/// Answers admin API paths that have no route.
pub async fn api_not_found_handler() -> AppError {
    AppError::not_found("No such API endpoint")
}
