use crate::models::users::UserResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::app_error::AppError;
use std::sync::Arc;
use uuid::Uuid;

/// Owns the `following`/`followers` edge lists. For any two users A and B,
/// `B ∈ A.following` iff `A ∈ B.followers`; both sides of an edge are written
/// in one repository transaction so the pair never diverges.
#[derive(Clone)]
pub struct UserService {
    user_repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        UserService { user_repository }
    }

    pub async fn follow_user(
        &self,
        acting_user_id: Uuid,
        target_user_id: Uuid,
    ) -> Result<(), AppError> {
        if acting_user_id == target_user_id {
            return Err(AppError::Conflict(
                "You cannot follow yourself".to_string(),
            ));
        }

        let acting_user = self
            .user_repository
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        self.user_repository
            .find_by_id(target_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if acting_user.following.contains(&target_user_id) {
            return Err(AppError::Conflict("Already following".to_string()));
        }

        // The conditional set-add can still lose a race to a concurrent
        // follow; the repository reports that as `false`.
        let added = self
            .user_repository
            .add_follow_edge(acting_user_id, target_user_id)
            .await?;
        if !added {
            return Err(AppError::Conflict("Already following".to_string()));
        }

        Ok(())
    }

    pub async fn unfollow_user(
        &self,
        acting_user_id: Uuid,
        target_user_id: Uuid,
    ) -> Result<(), AppError> {
        let acting_user = self
            .user_repository
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        self.user_repository
            .find_by_id(target_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !acting_user.following.contains(&target_user_id) {
            return Err(AppError::Conflict("Not following".to_string()));
        }

        let removed = self
            .user_repository
            .remove_follow_edge(acting_user_id, target_user_id)
            .await?;
        if !removed {
            return Err(AppError::Conflict("Not following".to_string()));
        }

        Ok(())
    }

    /// Case-insensitive substring search across first name, last name and
    /// username. No ranking, no pagination.
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repository.search(query).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::User;
    use crate::repositories::memory::InMemoryUserRepository;

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: name.to_string(),
            last_name: "Doe".to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "hash".to_string(),
            ..Default::default()
        }
    }

    fn service(users: Vec<User>) -> (UserService, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::with_users(users));
        (UserService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn follow_updates_both_sides_of_the_edge() {
        let (a, b) = (user("Alice"), user("Bob"));
        let (service, repo) = service(vec![a.clone(), b.clone()]);

        service.follow_user(a.id, b.id).await.unwrap();

        let a_after = repo.find_by_id(a.id).await.unwrap().unwrap();
        let b_after = repo.find_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(a_after.following, vec![b.id]);
        assert_eq!(b_after.followers, vec![a.id]);
        assert!(a_after.followers.is_empty());
        assert!(b_after.following.is_empty());
    }

    #[tokio::test]
    async fn self_follow_is_rejected() {
        let a = user("Alice");
        let (service, repo) = service(vec![a.clone()]);

        let err = service.follow_user(a.id, a.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let a_after = repo.find_by_id(a.id).await.unwrap().unwrap();
        assert!(a_after.following.is_empty());
        assert!(a_after.followers.is_empty());
    }

    #[tokio::test]
    async fn following_an_unknown_user_is_not_found() {
        let a = user("Alice");
        let (service, _) = service(vec![a.clone()]);

        let err = service.follow_user(a.id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = service.follow_user(Uuid::new_v4(), a.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn following_twice_conflicts_and_leaves_a_single_edge() {
        let (a, b) = (user("Alice"), user("Bob"));
        let (service, repo) = service(vec![a.clone(), b.clone()]);

        service.follow_user(a.id, b.id).await.unwrap();
        let err = service.follow_user(a.id, b.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let a_after = repo.find_by_id(a.id).await.unwrap().unwrap();
        let b_after = repo.find_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(a_after.following, vec![b.id]);
        assert_eq!(b_after.followers, vec![a.id]);
    }

    #[tokio::test]
    async fn unfollow_without_an_edge_conflicts() {
        let (a, b) = (user("Alice"), user("Bob"));
        let (service, _) = service(vec![a.clone(), b.clone()]);

        let err = service.unfollow_user(a.id, b.id).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn follow_then_unfollow_restores_both_records() {
        let (a, b) = (user("Alice"), user("Bob"));
        let (service, repo) = service(vec![a.clone(), b.clone()]);

        service.follow_user(a.id, b.id).await.unwrap();
        service.unfollow_user(a.id, b.id).await.unwrap();

        let a_after = repo.find_by_id(a.id).await.unwrap().unwrap();
        let b_after = repo.find_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(a_after.following, a.following);
        assert_eq!(b_after.followers, b.followers);
    }

    #[tokio::test]
    async fn mutual_edge_invariant_holds_across_a_sequence_of_operations() {
        let (a, b, c) = (user("Alice"), user("Bob"), user("Carol"));
        let (service, repo) = service(vec![a.clone(), b.clone(), c.clone()]);

        service.follow_user(a.id, b.id).await.unwrap();
        service.follow_user(b.id, a.id).await.unwrap();
        service.follow_user(a.id, c.id).await.unwrap();
        service.unfollow_user(a.id, b.id).await.unwrap();
        service.follow_user(c.id, a.id).await.unwrap();

        let ids = [a.id, b.id, c.id];
        for x in ids {
            let x_rec = repo.find_by_id(x).await.unwrap().unwrap();
            for y in ids {
                let y_rec = repo.find_by_id(y).await.unwrap().unwrap();
                assert_eq!(
                    x_rec.following.contains(&y),
                    y_rec.followers.contains(&x),
                    "edge {x} -> {y} is not mirrored"
                );
            }
            assert!(!x_rec.following.contains(&x));
            assert!(!x_rec.followers.contains(&x));
        }
    }

    #[tokio::test]
    async fn mutual_follow_back_yields_two_mirrored_edges() {
        let (a, b) = (user("Alice"), user("Bob"));
        let (service, repo) = service(vec![a.clone(), b.clone()]);

        service.follow_user(a.id, b.id).await.unwrap();
        service.follow_user(b.id, a.id).await.unwrap();

        let a_after = repo.find_by_id(a.id).await.unwrap().unwrap();
        let b_after = repo.find_by_id(b.id).await.unwrap().unwrap();
        assert_eq!(a_after.following, vec![b.id]);
        assert_eq!(a_after.followers, vec![b.id]);
        assert_eq!(b_after.following, vec![a.id]);
        assert_eq!(b_after.followers, vec![a.id]);
    }

    #[tokio::test]
    async fn search_treats_percent_and_underscore_literally() {
        let mut deal = user("Deal");
        deal.first_name = "100% Legit".to_string();
        let mut snake = user("Snake");
        snake.username = "a_b".to_string();
        let plain = user("Plain");
        let (service, _) = service(vec![deal.clone(), snake.clone(), plain]);

        let percent = service.search_users("100%").await.unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].id, deal.id);

        let underscore = service.search_users("a_b").await.unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].id, snake.id);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_across_name_fields() {
        let mut anna = user("Anna");
        anna.last_name = "Karenina".to_string();
        let bob = user("Bob");
        let (service, _) = service(vec![anna.clone(), bob]);

        let by_first = service.search_users("ann").await.unwrap();
        assert_eq!(by_first.len(), 1);
        assert_eq!(by_first[0].id, anna.id);

        let by_last = service.search_users("KAREN").await.unwrap();
        assert_eq!(by_last.len(), 1);

        let none = service.search_users("zzz").await.unwrap();
        assert!(none.is_empty());
    }
}
