use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the friendship graph router.
///
/// `/add_friend` is an accepted alias of `/friends/add`.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/friends/{user_id}", get(handlers::list_friends))
        .route("/non_friends/{user_id}", get(handlers::list_non_friends))
        .route("/friends/add", post(handlers::add_friend))
        .route("/add_friend", post(handlers::add_friend))
        .route("/remove_friend", post(handlers::remove_friend))
        .layer(Extension(service))
}
