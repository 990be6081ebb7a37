use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    apis::api_models::{
        request::{
            ChangeAboutBody, ChangeCoverBody, ChangeDetailsBody, ChangeInterestsBody,
            ChangeProfileImageBody,
        },
        response::{UserEnvelope, UserLookupResponse, UserWithMessage},
    },
    apis::middlewares::auth::AuthUser,
    models::users::UserUpdate,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "profiles";

/// Get the acting user's own profile
#[utoipa::path(
    get,
    tag = TAG,
    path = "/profile",
    operation_id = "getProfile",
    responses(
        (status = 200, description = "The profile", body = UserEnvelope),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_profile(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state.profile_service.get_profile(acting_user_id).await?;
    Ok((StatusCode::OK, Json(UserEnvelope::new(user))))
}

/// Update the acting user's profile
#[utoipa::path(
    put,
    tag = TAG,
    path = "/profile",
    operation_id = "updateProfile",
    responses(
        (status = 200, description = "Updated profile", body = UserEnvelope),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = UserUpdate
)]
pub(super) async fn update_profile(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Json(update): Json<UserUpdate>,
) -> Result<impl IntoResponse, AppError> {
    let user = app_state
        .profile_service
        .update_profile(acting_user_id, update)
        .await?;
    Ok((StatusCode::OK, Json(UserEnvelope::new(user))))
}

/// Change name and contact details
#[utoipa::path(
    put,
    tag = TAG,
    path = "/details",
    operation_id = "changeDetails",
    responses(
        (status = 200, description = "Details updated", body = UserWithMessage),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = ChangeDetailsBody
)]
pub(super) async fn change_details(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Json(body): Json<ChangeDetailsBody>,
) -> Result<impl IntoResponse, AppError> {
    let update = UserUpdate {
        first_name: body.first_name,
        last_name: body.last_name,
        headline: body.headline,
        city: body.city,
        country: body.country,
        website_link: body.website_link,
        phone: body.phone,
        ..Default::default()
    };
    let user = app_state
        .profile_service
        .update_profile(acting_user_id, update)
        .await?;
    Ok((
        StatusCode::OK,
        Json(UserWithMessage::new("Details updated successfully", user)),
    ))
}

/// Change the about text
#[utoipa::path(
    put,
    tag = TAG,
    path = "/about",
    operation_id = "changeAbout",
    responses(
        (status = 200, description = "About updated", body = UserWithMessage),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = ChangeAboutBody
)]
pub(super) async fn change_about(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Json(body): Json<ChangeAboutBody>,
) -> Result<impl IntoResponse, AppError> {
    let update = UserUpdate {
        about: Some(body.about),
        ..Default::default()
    };
    let user = app_state
        .profile_service
        .update_profile(acting_user_id, update)
        .await?;
    Ok((
        StatusCode::OK,
        Json(UserWithMessage::new("About updated successfully", user)),
    ))
}

/// Replace the interests list
#[utoipa::path(
    put,
    tag = TAG,
    path = "/interests",
    operation_id = "changeInterests",
    responses(
        (status = 200, description = "Interests updated", body = UserWithMessage),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = ChangeInterestsBody
)]
pub(super) async fn change_interests(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Json(body): Json<ChangeInterestsBody>,
) -> Result<impl IntoResponse, AppError> {
    let update = UserUpdate {
        interests: Some(body.interests),
        ..Default::default()
    };
    let user = app_state
        .profile_service
        .update_profile(acting_user_id, update)
        .await?;
    Ok((
        StatusCode::OK,
        Json(UserWithMessage::new("Interests updated successfully", user)),
    ))
}

/// Change the cover image
#[utoipa::path(
    put,
    tag = TAG,
    path = "/cover",
    operation_id = "changeCover",
    responses(
        (status = 200, description = "Cover updated", body = UserWithMessage),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = ChangeCoverBody
)]
pub(super) async fn change_cover(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Json(body): Json<ChangeCoverBody>,
) -> Result<impl IntoResponse, AppError> {
    let update = UserUpdate {
        cover: Some(body.cover),
        ..Default::default()
    };
    let user = app_state
        .profile_service
        .update_profile(acting_user_id, update)
        .await?;
    Ok((
        StatusCode::OK,
        Json(UserWithMessage::new("Cover updated successfully", user)),
    ))
}

/// Change the profile image
#[utoipa::path(
    put,
    tag = TAG,
    path = "/profile-image",
    operation_id = "changeProfileImage",
    responses(
        (status = 200, description = "Profile image updated", body = UserWithMessage),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = ChangeProfileImageBody
)]
pub(super) async fn change_profile_image(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Json(body): Json<ChangeProfileImageBody>,
) -> Result<impl IntoResponse, AppError> {
    let update = UserUpdate {
        profile_image: Some(body.profile_image),
        ..Default::default()
    };
    let user = app_state
        .profile_service
        .update_profile(acting_user_id, update)
        .await?;
    Ok((
        StatusCode::OK,
        Json(UserWithMessage::new(
            "Profile Image updated successfully",
            user,
        )),
    ))
}

/// Get a user by username, with relationship flags
#[utoipa::path(
    get,
    tag = TAG,
    path = "/by-username/{userName}",
    operation_id = "getUserByUserName",
    responses(
        (status = 200, description = "The user and relationship flags", body = UserLookupResponse),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("userName" = String, Path, description = "Username")
    )
)]
pub(super) async fn get_user_by_username(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = app_state
        .profile_service
        .get_user_by_username(acting_user_id, &username)
        .await?;
    Ok((StatusCode::OK, Json(lookup)))
}
