use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserBody {
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDetailsBody {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub headline: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub website_link: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ChangeAboutBody {
    pub about: String,
}

#[derive(Deserialize, ToSchema)]
pub struct ChangeInterestsBody {
    pub interests: Vec<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct ChangeCoverBody {
    pub cover: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangeProfileImageBody {
    pub profile_image: String,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddEventBody {
    pub event_name: String,
    pub event_description: Option<String>,
    pub event_details: Option<String>,
    pub event_date: Option<DateTime<Utc>>,
    pub event_tags: Option<Vec<String>>,
    pub helping: Option<String>,
    pub event_poster: Option<String>,
}
