use axum::{
    extract::Path,
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use std::sync::Arc;
use tracing::{error, info};

use crate::api::rest::dto::{FriendDto, FriendPairReq, MessageResp};
use crate::api::rest::error::{from_parts, map_domain_error};
use crate::domain::service::Service;
use api_problem::ProblemResponse;

/// Create a friendship between two users
pub async fn add_friend(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<FriendPairReq>,
) -> Result<(StatusCode, Json<MessageResp>), ProblemResponse> {
    info!(
        "Adding friendship between {} and {}",
        req_body.amigo_1, req_body.amigo_2
    );

    match svc.add_friend(req_body.amigo_1, req_body.amigo_2).await {
        Ok(()) => Ok((
            StatusCode::CREATED,
            Json(MessageResp {
                message: "Friendship created".to_string(),
            }),
        )),
        Err(e) => {
            error!("Failed to add friendship: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// Remove a friendship. Succeeds as a no-op when the pair is not friends.
pub async fn remove_friend(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req_body): Json<FriendPairReq>,
) -> Result<Json<MessageResp>, ProblemResponse> {
    info!(
        "Removing friendship between {} and {}",
        req_body.amigo_1, req_body.amigo_2
    );

    match svc.remove_friend(req_body.amigo_1, req_body.amigo_2).await {
        Ok(()) => Ok(Json(MessageResp {
            message: "Friendship removed".to_string(),
        })),
        Err(e) => {
            error!("Failed to remove friendship: {}", e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// List a user's friends. An empty list is a 404.
pub async fn list_friends(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i64>,
    uri: Uri,
) -> Result<Json<Vec<FriendDto>>, ProblemResponse> {
    match svc.friends_of(user_id).await {
        Ok(friends) if friends.is_empty() => Err(from_parts(
            StatusCode::NOT_FOUND,
            "NO_FRIENDS",
            "No friends found",
            format!("User {} has no friends recorded", user_id),
            uri.path(),
        )),
        Ok(friends) => Ok(Json(friends.into_iter().map(FriendDto::from).collect())),
        Err(e) => {
            error!("Failed to list friends of {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}

/// List the users a user is NOT friends with (excluding the user itself)
pub async fn list_non_friends(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<i64>,
    uri: Uri,
) -> Result<Json<Vec<FriendDto>>, ProblemResponse> {
    match svc.non_friends_of(user_id).await {
        Ok(users) => Ok(Json(users.into_iter().map(FriendDto::from).collect())),
        Err(e) => {
            error!("Failed to list non-friends of {}: {}", user_id, e);
            Err(map_domain_error(&e, uri.path()))
        }
    }
}
