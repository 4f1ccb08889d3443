use api_problem::{Problem, ProblemResponse};
use axum::http::StatusCode;

use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance)
        .into()
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::SelfFriendship { id } => from_parts(
            StatusCode::BAD_REQUEST,
            "SELF_FRIENDSHIP",
            "Self friendship rejected",
            format!("User {} cannot befriend themselves", id),
            instance,
        ),
        DomainError::DuplicateFriendship { a, b } => from_parts(
            StatusCode::BAD_REQUEST,
            "DUPLICATE_FRIENDSHIP",
            "Already friends",
            format!("Users {} and {} are already friends", a, b),
            instance,
        ),
        DomainError::UnknownUser { id } => from_parts(
            StatusCode::NOT_FOUND,
            "UNKNOWN_USER",
            "Unknown user",
            format!("User with id {} was not found", id),
            instance,
        ),
        DomainError::Database { .. } => {
            // Log the internal error details but don't expose them to the client
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
