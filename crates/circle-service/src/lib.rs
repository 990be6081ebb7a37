use apis::setup_routes;
use axum::Router;
use repositories::{
    event_repository::PgEventRepository, user_repository::PgUserRepository,
};
use services::{
    auth_service::AuthService,
    discovery_service::{DiscoveryExclusion, DiscoveryService},
    event_service::EventService,
    profile_service::ProfileService,
    user_service::UserService,
};
use sqlx::postgres::PgPool;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utils::jwt::JwtService;

pub mod apis;
pub mod models;
pub mod repositories;
pub mod services;
pub mod settings;
pub mod utils;

const DEFAULT_TOKEN_EXPIRY_DAYS: i64 = 30;

pub struct AppState {
    pub auth_service: AuthService,
    pub user_service: UserService,
    pub discovery_service: DiscoveryService,
    pub profile_service: ProfileService,
    pub event_service: EventService,
    pub jwt_service: JwtService,
}

pub async fn setup_database(database_url: &str) -> Result<Arc<PgPool>, sqlx::Error> {
    let pool = PgPool::connect(database_url).await?;
    Ok(Arc::new(pool))
}

pub fn setup_services(db: Arc<PgPool>, settings: &settings::Settings) -> AppState {
    let user_repository = Arc::new(PgUserRepository::new(db.clone()));
    let event_repository = Arc::new(PgEventRepository::new(db));

    let jwt_service = JwtService::new(
        settings.jwt_secret.clone(),
        settings
            .token_expiry_days
            .unwrap_or(DEFAULT_TOKEN_EXPIRY_DAYS),
    );
    let exclusion = DiscoveryExclusion::from_setting(settings.discovery_exclusion.as_deref());

    AppState {
        auth_service: AuthService::new(user_repository.clone(), jwt_service.clone()),
        user_service: UserService::new(user_repository.clone()),
        discovery_service: DiscoveryService::new(user_repository.clone(), exclusion),
        profile_service: ProfileService::new(user_repository.clone()),
        event_service: EventService::new(event_repository, user_repository),
        jwt_service,
    }
}

pub async fn setup_router(settings: &settings::Settings) -> Result<Router, sqlx::Error> {
    let db = setup_database(&settings.database_url).await?;
    let state = setup_services(db, settings);
    let router = setup_routes();

    Ok(router
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state)))
}

pub fn init_tracing(settings: &settings::Settings) {
    let env = settings.environment.clone().unwrap_or("DEV".to_string());
    let level = match env.as_str() {
        "PROD" => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(env != "PROD")
        .init();
}
