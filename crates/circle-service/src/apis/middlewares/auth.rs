use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

use crate::{utils::errors::app_error::AppError, AppState};

/// The authenticated principal, resolved once per request from the bearer
/// token. Handlers receive the acting user id through this extractor and
/// thread it into the services explicitly.
#[derive(Clone, Copy, Debug)]
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))?;

        let user_id = state.jwt_service.validate_token(token)?;
        Ok(AuthUser(user_id))
    }
}
