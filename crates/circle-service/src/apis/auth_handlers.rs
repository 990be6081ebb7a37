use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    apis::api_models::{
        request::{LoginBody, RegisterUserBody},
        response::{AuthResponse, MessageResponse},
    },
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "auth";

/// Register a new user
#[utoipa::path(
    post,
    tag = TAG,
    path = "/register",
    operation_id = "registerUser",
    responses(
        (status = 201, description = "Registered successfully", body = MessageResponse),
        (status = 400, description = "Email already in use", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = RegisterUserBody
)]
pub(super) async fn register(
    State(app_state): State<Arc<AppState>>,
    Json(body): Json<RegisterUserBody>,
) -> Result<impl IntoResponse, AppError> {
    app_state.auth_service.register(body).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registered Successfully!")),
    ))
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    tag = TAG,
    path = "/login",
    operation_id = "login",
    responses(
        (status = 200, description = "Logged in successfully", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = LoginBody
)]
pub(super) async fn login(
    State(app_state): State<Arc<AppState>>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = app_state
        .auth_service
        .login(&body.email, &body.password)
        .await?;
    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            user,
            token,
            message: "Logged In Successfully!".to_string(),
            success: true,
        }),
    ))
}
