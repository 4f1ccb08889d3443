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
        DomainError::UserNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "USERS_NOT_FOUND",
            "User not found",
            format!("User with id {} was not found", id),
            instance,
        ),
        DomainError::DuplicateEmail { email } => from_parts(
            StatusCode::BAD_REQUEST,
            "DUPLICATE_EMAIL",
            "Email already registered",
            format!("Email '{}' is already registered", email),
            instance,
        ),
        DomainError::AuthFailure => from_parts(
            // One body for unknown email and wrong password; the response
            // must not reveal whether the email exists.
            StatusCode::UNAUTHORIZED,
            "AUTH_FAILURE",
            "Authentication failed",
            "Invalid email or password",
            instance,
        ),
        DomainError::InvalidEmail { email } => from_parts(
            StatusCode::BAD_REQUEST,
            "VALIDATION",
            "Validation error",
            format!("Email '{}' is invalid", email),
            instance,
        ),
        DomainError::MissingField { .. } => from_parts(
            StatusCode::BAD_REQUEST,
            "VALIDATION",
            "Validation error",
            format!("{}", e),
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
