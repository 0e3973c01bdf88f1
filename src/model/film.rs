use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilmDto {
    pub id: i32,
    pub title: String,
    pub episode_id: i32,
    pub director: String,
    pub producer: String,
    /// Rendered as `YYYY-MM-DD`.
    pub release_date: NaiveDate,
    pub opening_crawl: String,
    /// Names of the characters appearing in the film, ordered by character id.
    pub characters: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFilmDto {
    pub title: String,
    pub episode_id: i32,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    pub opening_crawl: String,
}
