use crate::models::users::UserResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use uuid::Uuid;

const SUGGEST_LIMIT: i64 = 5;

/// Which of the acting user's edge lists is removed from the candidate set.
///
/// Excluding `followers` (people who follow you) lets recommendations keep
/// surfacing accounts you already follow, so the default excludes
/// `following` instead. The old behavior stays selectable through the
/// `discovery_exclusion` setting for clients that depend on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DiscoveryExclusion {
    #[default]
    Following,
    Followers,
}

impl DiscoveryExclusion {
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("followers") => DiscoveryExclusion::Followers,
            _ => DiscoveryExclusion::Following,
        }
    }
}

/// Computes "who to follow" candidate lists. This is a recall filter, not a
/// scored recommender: candidates share at least one interest with the acting
/// user and ties keep store order.
#[derive(Clone)]
pub struct DiscoveryService {
    user_repository: Arc<dyn UserRepository>,
    exclusion: DiscoveryExclusion,
}

impl DiscoveryService {
    pub fn new(user_repository: Arc<dyn UserRepository>, exclusion: DiscoveryExclusion) -> Self {
        DiscoveryService {
            user_repository,
            exclusion,
        }
    }

    /// Unbounded candidate list.
    pub async fn who_to_follow(&self, acting_user_id: Uuid) -> Result<Vec<UserResponse>, AppError> {
        self.discover(acting_user_id, None).await
    }

    /// Same filter, capped at five entries.
    pub async fn suggest_users(&self, acting_user_id: Uuid) -> Result<Vec<UserResponse>, AppError> {
        self.discover(acting_user_id, Some(SUGGEST_LIMIT)).await
    }

    async fn discover(
        &self,
        acting_user_id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<UserResponse>, AppError> {
        let acting_user = self
            .user_repository
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        // Cold start: no interests recorded, fall back to everyone but self.
        let users = if acting_user.interests.is_empty() {
            self.user_repository
                .list_all_except(acting_user.id, limit)
                .await?
        } else {
            let excluded = match self.exclusion {
                DiscoveryExclusion::Following => &acting_user.following,
                DiscoveryExclusion::Followers => &acting_user.followers,
            };
            self.user_repository
                .list_by_interests(
                    &acting_user.username,
                    &acting_user.interests,
                    excluded,
                    limit,
                )
                .await?
        };

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
