use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, FromRow, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub event_name: String,
    pub event_description: Option<String>,
    pub event_details: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub event_tags: Vec<String>,
    pub helping: Option<String>,
    pub event_poster: Option<String>,
    pub created_at: DateTime<Utc>,
}
