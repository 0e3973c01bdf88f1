//! Film factory for creating test film entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test films.
pub struct FilmFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    episode_id: i32,
    release_date: NaiveDate,
}

impl<'a> FilmFactory<'a> {
    /// Creates a new FilmFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Film {id}"`
    /// - episode_id: `4`
    /// - release_date: `1977-05-25`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Film {}", id),
            episode_id: 4,
            release_date: NaiveDate::from_ymd_opt(1977, 5, 25).unwrap_or_default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn episode_id(mut self, episode_id: i32) -> Self {
        self.episode_id = episode_id;
        self
    }

    pub fn release_date(mut self, release_date: NaiveDate) -> Self {
        self.release_date = release_date;
        self
    }

    /// Builds and inserts the film entity into the database.
    pub async fn build(self) -> Result<entity::film::Model, DbErr> {
        entity::film::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            episode_id: ActiveValue::Set(self.episode_id),
            director: ActiveValue::Set("George Lucas".to_string()),
            producer: ActiveValue::Set("Gary Kurtz".to_string()),
            release_date: ActiveValue::Set(self.release_date),
            opening_crawl: ActiveValue::Set("It is a period of civil war.".to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a film with default values.
pub async fn create_film(db: &DatabaseConnection) -> Result<entity::film::Model, DbErr> {
    FilmFactory::new(db).build().await
}
