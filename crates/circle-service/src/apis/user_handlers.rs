use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    apis::api_models::response::{MessageResponse, UserEnvelope, UsersResponse},
    apis::middlewares::auth::AuthUser,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "users";

/// Follow a user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/follow/{id}",
    operation_id = "followUser",
    responses(
        (status = 200, description = "User followed successfully", body = MessageResponse),
        (status = 400, description = "Already following or self-follow", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID to follow")
    )
)]
pub(super) async fn follow_user(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Path(target_user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .user_service
        .follow_user(acting_user_id, target_user_id)
        .await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Followed successfully")),
    ))
}

/// Unfollow a user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/unfollow/{targetUserId}",
    operation_id = "unfollowUser",
    responses(
        (status = 200, description = "User unfollowed successfully", body = MessageResponse),
        (status = 400, description = "Not following", body = ErrorPayload),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("targetUserId" = Uuid, Path, description = "User ID to unfollow")
    )
)]
pub(super) async fn unfollow_user(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Path(target_user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .user_service
        .unfollow_user(acting_user_id, target_user_id)
        .await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Unfollowed successfully")),
    ))
}

/// Who-to-follow candidates (unbounded)
#[utoipa::path(
    get,
    tag = TAG,
    path = "/who-to-follow",
    operation_id = "whoToFollow",
    responses(
        (status = 200, description = "Candidate users", body = UsersResponse),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn who_to_follow(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state
        .discovery_service
        .who_to_follow(acting_user_id)
        .await?;
    Ok((StatusCode::OK, Json(UsersResponse::new(users))))
}

/// Suggested users (at most five)
#[utoipa::path(
    get,
    tag = TAG,
    path = "/suggest",
    operation_id = "suggestUsers",
    responses(
        (status = 200, description = "Suggested users", body = UsersResponse),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn suggest_users(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state
        .discovery_service
        .suggest_users(acting_user_id)
        .await?;
    Ok((StatusCode::OK, Json(UsersResponse::new(users))))
}

/// Search users by name or username
#[utoipa::path(
    get,
    tag = TAG,
    path = "/search/{query}",
    operation_id = "searchUsers",
    responses(
        (status = 200, description = "Matching users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("query" = String, Path, description = "Case-insensitive substring")
    )
)]
pub(super) async fn search_users(
    State(app_state): State<Arc<AppState>>,
    AuthUser(_auth_user): AuthUser,
    Path(query): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_service.search_users(&query).await?;
    Ok((StatusCode::OK, Json(UsersResponse::new(users))))
}

/// Get a user by id
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}",
    operation_id = "getUserById",
    responses(
        (status = 200, description = "The user", body = UserEnvelope),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "User ID")
    )
)]
pub(super) async fn get_user_by_id(
    State(app_state): State<Arc<AppState>>,
    AuthUser(_auth_user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.profile_service.get_user_by_id(id).await?;
    Ok((StatusCode::OK, Json(UserEnvelope::new(user))))
}
