use serde::{Deserialize, Serialize};

use user_directory::contract::model::User;

/// Request body for adding/removing a friendship. Field names follow the
/// persisted schema (`amigo_1`, `amigo_2`); order does not matter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendPairReq {
    pub amigo_1: i64,
    pub amigo_2: i64,
}

/// REST DTO for a friend record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResp {
    pub message: String,
}

impl From<User> for FriendDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}
