use axum::{http::StatusCode, response::IntoResponse};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user record as stored. `password` holds the argon2 hash and must never
/// leave the service; outward-facing code converts to [`UserResponse`].
#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize, Default)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website_link: Option<String>,
    pub profile_image: Option<String>,
    pub cover: Option<String>,
    pub interests: Vec<String>,
    pub following: Vec<Uuid>,
    pub followers: Vec<Uuid>,
    pub blocked_users: Vec<Uuid>,
    pub events: Vec<Uuid>,
    pub volunteering: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Partial update applied to a user record; `None` fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website_link: Option<String>,
    pub profile_image: Option<String>,
    pub cover: Option<String>,
    pub interests: Option<Vec<String>>,
}

/// The outward view of a user. Deliberately has no credential field.
#[derive(Serialize, Deserialize, ToSchema, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub headline: Option<String>,
    pub about: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website_link: Option<String>,
    pub profile_image: Option<String>,
    pub cover: Option<String>,
    pub interests: Vec<String>,
    pub following: Vec<Uuid>,
    pub followers: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            username: user.username,
            email: user.email,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            phone: user.phone,
            headline: user.headline,
            about: user.about,
            city: user.city,
            country: user.country,
            website_link: user.website_link,
            profile_image: user.profile_image,
            cover: user.cover,
            interests: user.interests,
            following: user.following,
            followers: user.followers,
            created_at: user.created_at,
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_never_serializes_the_credential() {
        let user = User {
            id: Uuid::new_v4(),
            first_name: "Anna".to_string(),
            username: "anna".to_string(),
            email: "anna@example.com".to_string(),
            password: "argon2-hash".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("password"));
        assert!(object.contains_key("username"));
    }
}
