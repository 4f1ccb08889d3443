use serde::{Deserialize, Serialize};

use crate::contract::model::{Credentials, NewUser, User};

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// REST DTO for registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterReq {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// REST DTO for login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResp {
    pub id: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResp {
    pub user_id: i64,
    pub message: String,
}

// Conversion implementations between REST DTOs and contract models

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

impl From<RegisterReq> for NewUser {
    fn from(req: RegisterReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        }
    }
}

impl From<LoginReq> for Credentials {
    fn from(req: LoginReq) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}
