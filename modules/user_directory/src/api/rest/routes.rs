use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the user directory router.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/users", get(handlers::list_users))
        .route("/users/{id}", get(handlers::get_user))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .layer(Extension(service))
}
