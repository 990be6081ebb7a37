use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    apis::api_models::{
        request::AddEventBody,
        response::{EventEnvelope, EventsResponse, MessageResponse},
    },
    apis::middlewares::auth::AuthUser,
    utils::errors::{app_error::AppError, error_payload::ErrorPayload},
    AppState,
};

const TAG: &str = "events";

/// Create an event
#[utoipa::path(
    post,
    tag = TAG,
    path = "/",
    operation_id = "addEvent",
    responses(
        (status = 200, description = "Event added successfully", body = EventEnvelope),
        (status = 404, description = "User not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    request_body = AddEventBody
)]
pub(super) async fn add_event(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Json(body): Json<AddEventBody>,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state.event_service.add_event(acting_user_id, body).await?;
    Ok((StatusCode::OK, Json(EventEnvelope::new(event))))
}

/// List all events
#[utoipa::path(
    get,
    tag = TAG,
    path = "/",
    operation_id = "getAllEvents",
    responses(
        (status = 200, description = "All events", body = EventsResponse),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    )
)]
pub(super) async fn get_all_events(
    State(app_state): State<Arc<AppState>>,
    AuthUser(_auth_user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let events = app_state.event_service.get_all_events().await?;
    Ok((StatusCode::OK, Json(EventsResponse::new(events))))
}

/// Join an event as a volunteer
#[utoipa::path(
    post,
    tag = TAG,
    path = "/join/{eventId}",
    operation_id = "joinEvent",
    responses(
        (status = 200, description = "Event joined successfully", body = MessageResponse),
        (status = 404, description = "User or event not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("eventId" = Uuid, Path, description = "Event ID")
    )
)]
pub(super) async fn join_event(
    State(app_state): State<Arc<AppState>>,
    AuthUser(acting_user_id): AuthUser,
    Path(event_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state
        .event_service
        .join_event(acting_user_id, event_id)
        .await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Event joined successfully")),
    ))
}

/// Get an event by id
#[utoipa::path(
    get,
    tag = TAG,
    path = "/{id}",
    operation_id = "getEventById",
    responses(
        (status = 200, description = "The event", body = EventEnvelope),
        (status = 404, description = "Event not found", body = ErrorPayload),
        (status = 500, description = "Internal server error", body = ErrorPayload)
    ),
    params(
        ("id" = Uuid, Path, description = "Event ID")
    )
)]
pub(super) async fn get_event_by_id(
    State(app_state): State<Arc<AppState>>,
    AuthUser(_auth_user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let event = app_state.event_service.get_event_by_id(id).await?;
    Ok((StatusCode::OK, Json(EventEnvelope::new(event))))
}
