//! In-memory repository adapters backing the unit tests. Insertion order is
//! preserved so "store order" assertions behave like the Postgres adapter's
//! `ORDER BY created_at`.

use crate::models::events::Event;
use crate::models::users::{User, UserUpdate};
use crate::repositories::event_repository::EventRepository;
use crate::repositories::user_repository::UserRepository;
use async_trait::async_trait;
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn with_users(users: Vec<User>) -> Self {
        InMemoryUserRepository {
            users: RwLock::new(users),
        }
    }

    fn read(&self) -> Vec<User> {
        self.users.read().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> Result<(), sqlx::Error> {
        self.users.write().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        Ok(self.read().into_iter().find(|u| u.id == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self.read().into_iter().find(|u| u.email == email))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        Ok(self.read().into_iter().find(|u| u.username == username))
    }

    async fn list_all_except(
        &self,
        id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<User>, sqlx::Error> {
        let mut users: Vec<User> = self.read().into_iter().filter(|u| u.id != id).collect();
        if let Some(limit) = limit {
            users.truncate(limit as usize);
        }
        Ok(users)
    }

    async fn list_by_interests(
        &self,
        username: &str,
        interests: &[String],
        excluded: &[Uuid],
        limit: Option<i64>,
    ) -> Result<Vec<User>, sqlx::Error> {
        let mut users: Vec<User> = self
            .read()
            .into_iter()
            .filter(|u| {
                u.username != username
                    && u.interests.iter().any(|i| interests.contains(i))
                    && !excluded.contains(&u.id)
            })
            .collect();
        if let Some(limit) = limit {
            users.truncate(limit as usize);
        }
        Ok(users)
    }

    async fn search(&self, query: &str) -> Result<Vec<User>, sqlx::Error> {
        let needle = query.to_lowercase();
        Ok(self
            .read()
            .into_iter()
            .filter(|u| {
                u.first_name.to_lowercase().contains(&needle)
                    || u.last_name.to_lowercase().contains(&needle)
                    || u.username.to_lowercase().contains(&needle)
            })
            .collect())
    }

    async fn add_follow_edge(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        if follower_id == followed_id {
            return Ok(false);
        }
        let mut users = self.users.write().unwrap();
        let already = users
            .iter()
            .find(|u| u.id == follower_id)
            .map(|u| u.following.contains(&followed_id));
        match already {
            None | Some(true) => return Ok(false),
            Some(false) => {}
        }
        // Both records must exist; otherwise the edge would be one-sided.
        if !users.iter().any(|u| u.id == followed_id) {
            return Ok(false);
        }
        for user in users.iter_mut() {
            if user.id == follower_id {
                user.following.push(followed_id);
            } else if user.id == followed_id && !user.followers.contains(&follower_id) {
                user.followers.push(follower_id);
            }
        }
        Ok(true)
    }

    async fn remove_follow_edge(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let mut users = self.users.write().unwrap();
        let present = users
            .iter()
            .find(|u| u.id == follower_id)
            .map(|u| u.following.contains(&followed_id));
        match present {
            None | Some(false) => return Ok(false),
            Some(true) => {}
        }
        for user in users.iter_mut() {
            if user.id == follower_id {
                user.following.retain(|id| *id != followed_id);
            } else if user.id == followed_id {
                user.followers.retain(|id| *id != follower_id);
            }
        }
        Ok(true)
    }

    async fn apply_update(
        &self,
        id: Uuid,
        update: &UserUpdate,
    ) -> Result<Option<User>, sqlx::Error> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        macro_rules! apply {
            ($field:ident) => {
                if let Some(value) = update.$field.clone() {
                    user.$field = Some(value);
                }
            };
        }
        if let Some(first_name) = update.first_name.clone() {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name.clone() {
            user.last_name = last_name;
        }
        apply!(gender);
        apply!(phone);
        apply!(headline);
        apply!(about);
        apply!(city);
        apply!(country);
        apply!(website_link);
        apply!(profile_image);
        apply!(cover);
        if let Some(date_of_birth) = update.date_of_birth {
            user.date_of_birth = Some(date_of_birth);
        }
        if let Some(interests) = update.interests.clone() {
            user.interests = interests;
        }
        Ok(Some(user.clone()))
    }

    async fn add_event_ref(&self, user_id: Uuid, event_id: Uuid) -> Result<(), sqlx::Error> {
        let mut users = self.users.write().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id == user_id) {
            if !user.events.contains(&event_id) {
                user.events.push(event_id);
            }
        }
        Ok(())
    }

    async fn add_volunteering(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == user_id) else {
            return Ok(false);
        };
        if user.volunteering.contains(&event_id) {
            return Ok(false);
        }
        user.volunteering.push(event_id);
        Ok(true)
    }

    async fn list_event_refs(&self) -> Result<Vec<Uuid>, sqlx::Error> {
        let mut ids: Vec<Uuid> = Vec::new();
        for user in self.read() {
            for id in user.events {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        Ok(ids)
    }
}

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn create(&self, event: &Event) -> Result<(), sqlx::Error> {
        self.events.write().unwrap().push(event.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .find(|e| e.id == id)
            .cloned())
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, sqlx::Error> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .filter(|e| ids.contains(&e.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            first_name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn follow_edge_to_a_missing_record_is_refused() {
        let a = user("Alice");
        let repo = InMemoryUserRepository::with_users(vec![a.clone()]);

        let added = repo.add_follow_edge(a.id, Uuid::new_v4()).await.unwrap();
        assert!(!added);

        let a_after = repo.find_by_id(a.id).await.unwrap().unwrap();
        assert!(a_after.following.is_empty());
    }

    #[tokio::test]
    async fn follow_edge_from_a_missing_record_is_refused() {
        let b = user("Bob");
        let repo = InMemoryUserRepository::with_users(vec![b.clone()]);

        let added = repo.add_follow_edge(Uuid::new_v4(), b.id).await.unwrap();
        assert!(!added);

        let b_after = repo.find_by_id(b.id).await.unwrap().unwrap();
        assert!(b_after.followers.is_empty());
    }
}
