use crate::apis::api_models::response::UserLookupResponse;
use crate::models::users::{UserResponse, UserUpdate};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Read/update of non-relational profile attributes. All reads come back as
/// [`UserResponse`], so the credential hash never leaves this module.
#[derive(Clone)]
pub struct ProfileService {
    user_repository: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        ProfileService { user_repository }
    }

    pub async fn get_profile(&self, acting_user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .user_repository
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(UserResponse::from(user))
    }

    pub async fn update_profile(
        &self,
        acting_user_id: Uuid,
        update: UserUpdate,
    ) -> Result<UserResponse, AppError> {
        let user = self
            .user_repository
            .apply_update(acting_user_id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(UserResponse::from(user))
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(UserResponse::from(user))
    }

    /// Lookup by username plus the relationship flags relative to the acting
    /// user.
    pub async fn get_user_by_username(
        &self,
        acting_user_id: Uuid,
        username: &str,
    ) -> Result<UserLookupResponse, AppError> {
        let user = self
            .user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        let acting_user = self
            .user_repository
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let is_following = acting_user.following.contains(&user.id);
        let is_blocked = acting_user.blocked_users.contains(&user.id);
        let is_blocked_by = user.blocked_users.contains(&acting_user.id);

        Ok(UserLookupResponse {
            user: UserResponse::from(user),
            is_following,
            is_blocked,
            is_blocked_by,
            success: true,
        })
    }
}
