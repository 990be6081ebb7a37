use crate::apis::api_models::request::AddEventBody;
use crate::models::events::Event;
use crate::repositories::event_repository::EventRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::app_error::AppError;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct EventService {
    event_repository: Arc<dyn EventRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl EventService {
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        EventService {
            event_repository,
            user_repository,
        }
    }

    /// Inserts the event and records it on the creator's `events` list.
    pub async fn add_event(
        &self,
        acting_user_id: Uuid,
        body: AddEventBody,
    ) -> Result<Event, AppError> {
        self.user_repository
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let event = Event {
            id: Uuid::new_v4(),
            event_name: body.event_name,
            event_description: body.event_description,
            event_details: body.event_details,
            event_date: body.event_date,
            event_tags: body.event_tags.unwrap_or_default(),
            helping: body.helping,
            event_poster: body.event_poster,
            created_at: Utc::now(),
        };

        self.event_repository.create(&event).await?;
        self.user_repository
            .add_event_ref(acting_user_id, event.id)
            .await?;

        Ok(event)
    }

    /// Joining twice is a no-op, not a duplicate entry.
    pub async fn join_event(&self, acting_user_id: Uuid, event_id: Uuid) -> Result<(), AppError> {
        self.user_repository
            .find_by_id(acting_user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        self.event_repository
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

        self.user_repository
            .add_volunteering(acting_user_id, event_id)
            .await?;

        Ok(())
    }

    /// Every event referenced by some user's `events` list. Events are always
    /// created through [`add_event`](Self::add_event), so this is the full
    /// catalogue.
    pub async fn get_all_events(&self) -> Result<Vec<Event>, AppError> {
        let ids = self.user_repository.list_event_refs().await?;
        let events = self.event_repository.list_by_ids(&ids).await?;
        Ok(events)
    }

    pub async fn get_event_by_id(&self, id: Uuid) -> Result<Event, AppError> {
        let event = self
            .event_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;
        Ok(event)
    }
}
