use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{events::Event, users::UserResponse};

/// Bare confirmation; `success` is always `true` here, failures go through
/// `ErrorPayload`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    pub success: bool,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        MessageResponse {
            message: message.to_string(),
            success: true,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub message: String,
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserResponse,
    pub success: bool,
}

impl UserEnvelope {
    pub fn new(user: UserResponse) -> Self {
        UserEnvelope {
            user,
            success: true,
        }
    }
}

/// Shape of the profile-update endpoints: confirmation plus the updated
/// record.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserWithMessage {
    pub message: String,
    pub user: UserResponse,
    pub success: bool,
}

impl UserWithMessage {
    pub fn new(message: &str, user: UserResponse) -> Self {
        UserWithMessage {
            message: message.to_string(),
            user,
            success: true,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserResponse>,
    pub success: bool,
}

impl UsersResponse {
    pub fn new(users: Vec<UserResponse>) -> Self {
        UsersResponse {
            users,
            success: true,
        }
    }
}

/// Lookup by username, with the relationship flags the client renders on a
/// profile page. `blocked_users` is only read here; blocking itself is
/// managed elsewhere.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserLookupResponse {
    pub user: UserResponse,
    pub is_following: bool,
    pub is_blocked: bool,
    pub is_blocked_by: bool,
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventEnvelope {
    pub event: Event,
    pub success: bool,
}

impl EventEnvelope {
    pub fn new(event: Event) -> Self {
        EventEnvelope {
            event,
            success: true,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventsResponse {
    pub events: Vec<Event>,
    pub success: bool,
}

impl EventsResponse {
    pub fn new(events: Vec<Event>) -> Self {
        EventsResponse {
            events,
            success: true,
        }
    }
}
