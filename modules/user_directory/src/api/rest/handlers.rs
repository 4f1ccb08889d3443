use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::rest::dto::{LoginReq, LoginResp, RegisterReq, RegisterResp, UserDto};
use crate::api::rest::error::map_domain_error;
use crate::domain::service::Service;
use api_problem::ProblemResponse;

/// List all users
pub async fn list_users(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
) -> Result<Json<Vec<UserDto>>, ProblemResponse> {
    match svc.list_users().await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Get a specific user by id
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i64>,
    uri: Uri,
) -> Result<Json<UserDto>, ProblemResponse> {
    match svc.get_user(id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to get user {}: {}", id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Register a new user
pub async fn register(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<RegisterReq>,
) -> Result<(StatusCode, Json<RegisterResp>), ProblemResponse> {
    info!("Registering user with email: {}", req_body.email);

    match svc.register(req_body.into()).await {
        Ok(user) => Ok((
            StatusCode::CREATED,
            Json(RegisterResp {
                id: user.id,
                message: "User registered".to_string(),
            }),
        )),
        Err(e) => {
            error!("Failed to register user: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Log a user in (credential check; no session state is kept)
pub async fn login(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<LoginReq>,
) -> Result<Json<LoginResp>, ProblemResponse> {
    info!("Login attempt");

    match svc.authenticate(req_body.into()).await {
        Ok(user) => Ok(Json(LoginResp {
            user_id: user.id,
            message: "Login successful".to_string(),
        })),
        Err(e) => Err(map_domain_error(&e, uri.path())),
    }
}
