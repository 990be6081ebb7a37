use crate::models::events::Event;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<(), sqlx::Error>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error>;
    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, sqlx::Error>;
}

pub struct PgEventRepository {
    db: Arc<PgPool>,
}

impl PgEventRepository {
    pub fn new(db: Arc<PgPool>) -> Self {
        PgEventRepository { db }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    async fn create(&self, event: &Event) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO events (
                id, event_name, event_description, event_details, event_date,
                event_tags, helping, event_poster, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event.id)
        .bind(&event.event_name)
        .bind(&event.event_description)
        .bind(&event.event_details)
        .bind(event.event_date)
        .bind(&event.event_tags)
        .bind(&event.helping)
        .bind(&event.event_poster)
        .bind(event.created_at)
        .execute(self.db.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db.as_ref())
            .await
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(
            "SELECT * FROM events WHERE id = ANY($1) ORDER BY created_at",
        )
        .bind(ids)
        .fetch_all(self.db.as_ref())
        .await
    }
}
