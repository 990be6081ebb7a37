use crate::models::users::{User, UserUpdate};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

/// Persistence port for user records. The follow-edge mutations are the only
/// writers of the `following`/`followers` lists; both sides of an edge are
/// written in one transaction and each side is a conditional set-add, so a
/// lost race surfaces as `false` instead of a duplicate entry.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<(), sqlx::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    /// All users except `id`, in store order. `limit` of `None` is unbounded.
    async fn list_all_except(&self, id: Uuid, limit: Option<i64>)
        -> Result<Vec<User>, sqlx::Error>;

    /// Users whose username differs from `username`, whose interests overlap
    /// `interests`, and whose id is not in `excluded`.
    async fn list_by_interests(
        &self,
        username: &str,
        interests: &[String],
        excluded: &[Uuid],
        limit: Option<i64>,
    ) -> Result<Vec<User>, sqlx::Error>;

    /// Case-insensitive substring match on first name, last name or username.
    async fn search(&self, query: &str) -> Result<Vec<User>, sqlx::Error>;

    /// Returns `true` if the edge was created, `false` if it already existed
    /// or either record was missing.
    async fn add_follow_edge(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, sqlx::Error>;

    /// Returns `true` if the edge was removed, `false` if it did not exist.
    async fn remove_follow_edge(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, sqlx::Error>;

    /// Applies the non-`None` fields of `update` and returns the new record.
    async fn apply_update(
        &self,
        id: Uuid,
        update: &UserUpdate,
    ) -> Result<Option<User>, sqlx::Error>;

    async fn add_event_ref(&self, user_id: Uuid, event_id: Uuid) -> Result<(), sqlx::Error>;

    /// Set-add into the user's volunteering list; `false` means already joined.
    async fn add_volunteering(&self, user_id: Uuid, event_id: Uuid)
        -> Result<bool, sqlx::Error>;

    /// Distinct event ids referenced by any user's `events` list.
    async fn list_event_refs(&self) -> Result<Vec<Uuid>, sqlx::Error>;
}

pub struct PgUserRepository {
    db: Arc<PgPool>,
}

impl PgUserRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        PgUserRepository { db }
    }
}

/// Escapes `ILIKE` wildcards so a search query always matches literally.
fn escape_like(query: &str) -> String {
    query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO users (
                id, first_name, last_name, username, email, password,
                gender, date_of_birth, phone, headline, about, city, country,
                website_link, profile_image, cover, interests,
                following, followers, blocked_users, events, volunteering, created_at
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                $14, $15, $16, $17, $18, $19, $20, $21, $22, $23
            )
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.gender)
        .bind(user.date_of_birth)
        .bind(&user.phone)
        .bind(&user.headline)
        .bind(&user.about)
        .bind(&user.city)
        .bind(&user.country)
        .bind(&user.website_link)
        .bind(&user.profile_image)
        .bind(&user.cover)
        .bind(&user.interests)
        .bind(&user.following)
        .bind(&user.followers)
        .bind(&user.blocked_users)
        .bind(&user.events)
        .bind(&user.volunteering)
        .bind(user.created_at)
        .execute(self.db.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(self.db.as_ref())
            .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(self.db.as_ref())
            .await
    }

    async fn list_all_except(
        &self,
        id: Uuid,
        limit: Option<i64>,
    ) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE id <> $1 ORDER BY created_at LIMIT $2",
        )
        .bind(id)
        .bind(limit)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn list_by_interests(
        &self,
        username: &str,
        interests: &[String],
        excluded: &[Uuid],
        limit: Option<i64>,
    ) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE username <> $1
              AND interests && $2
              AND NOT (id = ANY($3))
            ORDER BY created_at
            LIMIT $4
            "#,
        )
        .bind(username)
        .bind(interests)
        .bind(excluded)
        .bind(limit)
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn search(&self, query: &str) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE first_name ILIKE '%' || $1 || '%'
               OR last_name ILIKE '%' || $1 || '%'
               OR username ILIKE '%' || $1 || '%'
            ORDER BY created_at
            "#,
        )
        .bind(escape_like(query))
        .fetch_all(self.db.as_ref())
        .await
    }

    async fn add_follow_edge(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        // Lock both rows in id order before touching either, so two
        // concurrent mutual follows (A -> B and B -> A) cannot take the row
        // locks in opposite orders and deadlock.
        sqlx::query("SELECT id FROM users WHERE id = ANY($1) ORDER BY id FOR UPDATE")
            .bind(vec![follower_id, followed_id])
            .fetch_all(&mut *tx)
            .await?;

        let forward = sqlx::query(
            r#"
            UPDATE users
            SET following = array_append(following, $2)
            WHERE id = $1 AND id <> $2 AND NOT ($2 = ANY(following))
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&mut *tx)
        .await?;

        if forward.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        let reverse = sqlx::query(
            r#"
            UPDATE users
            SET followers = array_append(followers, $2)
            WHERE id = $1 AND NOT ($2 = ANY(followers))
            "#,
        )
        .bind(followed_id)
        .bind(follower_id)
        .execute(&mut *tx)
        .await?;

        // The followed row can vanish between the service's existence check
        // and this transaction; committing would leave a one-sided edge.
        if reverse.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn remove_follow_edge(
        &self,
        follower_id: Uuid,
        followed_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = self.db.begin().await?;

        // Same deterministic lock order as add_follow_edge.
        sqlx::query("SELECT id FROM users WHERE id = ANY($1) ORDER BY id FOR UPDATE")
            .bind(vec![follower_id, followed_id])
            .fetch_all(&mut *tx)
            .await?;

        let forward = sqlx::query(
            r#"
            UPDATE users
            SET following = array_remove(following, $2)
            WHERE id = $1 AND $2 = ANY(following)
            "#,
        )
        .bind(follower_id)
        .bind(followed_id)
        .execute(&mut *tx)
        .await?;

        if forward.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        sqlx::query("UPDATE users SET followers = array_remove(followers, $2) WHERE id = $1")
            .bind(followed_id)
            .bind(follower_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }

    async fn apply_update(
        &self,
        id: Uuid,
        update: &UserUpdate,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                gender = COALESCE($4, gender),
                date_of_birth = COALESCE($5, date_of_birth),
                phone = COALESCE($6, phone),
                headline = COALESCE($7, headline),
                about = COALESCE($8, about),
                city = COALESCE($9, city),
                country = COALESCE($10, country),
                website_link = COALESCE($11, website_link),
                profile_image = COALESCE($12, profile_image),
                cover = COALESCE($13, cover),
                interests = COALESCE($14, interests)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(&update.gender)
        .bind(update.date_of_birth)
        .bind(&update.phone)
        .bind(&update.headline)
        .bind(&update.about)
        .bind(&update.city)
        .bind(&update.country)
        .bind(&update.website_link)
        .bind(&update.profile_image)
        .bind(&update.cover)
        .bind(&update.interests)
        .fetch_optional(self.db.as_ref())
        .await
    }

    async fn add_event_ref(&self, user_id: Uuid, event_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE users
            SET events = array_append(events, $2)
            WHERE id = $1 AND NOT ($2 = ANY(events))
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .execute(self.db.as_ref())
        .await?;

        Ok(())
    }

    async fn add_volunteering(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET volunteering = array_append(volunteering, $2)
            WHERE id = $1 AND NOT ($2 = ANY(volunteering))
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .execute(self.db.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_event_refs(&self) -> Result<Vec<Uuid>, sqlx::Error> {
        sqlx::query_scalar::<_, Uuid>("SELECT DISTINCT unnest(events) FROM users")
            .fetch_all(self.db.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped_so_queries_match_literally() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
