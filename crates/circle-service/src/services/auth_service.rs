use crate::apis::api_models::request::RegisterUserBody;
use crate::models::users::{User, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::app_error::AppError;
use crate::utils::jwt::JwtService;
use crate::utils::password;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

const DEFAULT_PROFILE_IMAGE: &str = "default-user.jpg";

#[derive(Clone)]
pub struct AuthService {
    user_repository: Arc<dyn UserRepository>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(user_repository: Arc<dyn UserRepository>, jwt_service: JwtService) -> Self {
        AuthService {
            user_repository,
            jwt_service,
        }
    }

    /// Creates a user record with the username derived from the email local
    /// part and all relationship lists empty.
    pub async fn register(&self, body: RegisterUserBody) -> Result<(), AppError> {
        if self
            .user_repository
            .find_by_email(&body.email)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let username = body
            .email
            .split('@')
            .next()
            .unwrap_or(body.email.as_str())
            .to_string();

        let user = User {
            id: Uuid::new_v4(),
            first_name: body.first_name,
            last_name: body.last_name,
            username,
            email: body.email,
            password: password::hash(&body.password)?,
            gender: body.gender,
            date_of_birth: body.date_of_birth,
            phone: body.phone,
            profile_image: Some(DEFAULT_PROFILE_IMAGE.to_string()),
            created_at: Utc::now(),
            ..Default::default()
        };

        self.user_repository.create(&user).await?;
        Ok(())
    }

    /// Verifies the credentials and issues a bearer token carrying the user
    /// id. The failure message deliberately does not say which check failed.
    pub async fn login(
        &self,
        email: &str,
        password_input: &str,
    ) -> Result<(UserResponse, String), AppError> {
        let user = self.user_repository.find_by_email(email).await?;

        match user {
            Some(user) if password::verify(password_input, &user.password) => {
                let token = self.jwt_service.issue_token(user.id)?;
                Ok((UserResponse::from(user), token))
            }
            _ => Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryUserRepository;

    fn service() -> (AuthService, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::default());
        let jwt = JwtService::new("test-secret".to_string(), 30);
        (AuthService::new(repo.clone(), jwt), repo)
    }

    fn register_body(email: &str) -> RegisterUserBody {
        RegisterUserBody {
            first_name: "Anna".to_string(),
            last_name: "Smith".to_string(),
            gender: None,
            date_of_birth: None,
            email: email.to_string(),
            phone: None,
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn register_derives_username_and_starts_with_empty_lists() {
        let (service, repo) = service();
        service
            .register(register_body("anna.smith@example.com"))
            .await
            .unwrap();

        let user = repo
            .find_by_email("anna.smith@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.username, "anna.smith");
        assert_ne!(user.password, "hunter2");
        assert!(user.following.is_empty());
        assert!(user.followers.is_empty());
        assert!(user.interests.is_empty());
        assert!(user.blocked_users.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let (service, _) = service();
        service.register(register_body("a@example.com")).await.unwrap();
        let err = service
            .register(register_body("a@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_returns_a_token_for_valid_credentials_only() {
        let (service, _) = service();
        service.register(register_body("a@example.com")).await.unwrap();

        let (user, token) = service.login("a@example.com", "hunter2").await.unwrap();
        assert_eq!(user.email, "a@example.com");
        assert!(!token.is_empty());

        let err = service
            .login("a@example.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));

        let err = service.login("nobody@example.com", "hunter2").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
