use std::sync::Arc;

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

use crate::AppState;

pub mod api_models;
pub mod auth_handlers;
pub mod event_handlers;
pub mod middlewares;
pub mod profile_handlers;
pub mod user_handlers;

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Social graph, discovery and search"),
        (name = "profiles", description = "Profile management"),
        (name = "events", description = "Community events")
    )
)]
pub struct ApiDoc;

pub fn setup_routes() -> Router<Arc<AppState>> {
    let api_doc = ApiDoc::openapi();

    let user_router = OpenApiRouter::new()
        .routes(routes!(auth_handlers::register))
        .routes(routes!(auth_handlers::login))
        .routes(routes!(
            profile_handlers::get_profile,
            profile_handlers::update_profile
        ))
        .routes(routes!(profile_handlers::change_details))
        .routes(routes!(profile_handlers::change_about))
        .routes(routes!(profile_handlers::change_interests))
        .routes(routes!(profile_handlers::change_cover))
        .routes(routes!(profile_handlers::change_profile_image))
        .routes(routes!(profile_handlers::get_user_by_username))
        .routes(routes!(user_handlers::follow_user))
        .routes(routes!(user_handlers::unfollow_user))
        .routes(routes!(user_handlers::who_to_follow))
        .routes(routes!(user_handlers::suggest_users))
        .routes(routes!(user_handlers::search_users))
        .routes(routes!(user_handlers::get_user_by_id));

    let event_router = OpenApiRouter::new()
        .routes(routes!(
            event_handlers::add_event,
            event_handlers::get_all_events
        ))
        .routes(routes!(event_handlers::join_event))
        .routes(routes!(event_handlers::get_event_by_id));

    let router = OpenApiRouter::with_openapi(api_doc)
        .nest("/users", user_router)
        .nest("/events", event_router);

    let (api_router, api_openapi) = OpenApiRouter::new()
        .nest("/api/v1", router)
        .split_for_parts();

    Router::new()
        .merge(Scalar::with_url("/docs", api_openapi))
        .merge(api_router)
}
