pub mod auth_service;
pub mod discovery_service;
pub mod event_service;
pub mod profile_service;
pub mod user_service;
