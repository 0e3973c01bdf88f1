//! Domain & parameter models for film operations

use chrono::NaiveDate;

use crate::model::film::{CreateFilmDto, FilmDto};

/// The film domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub id: i32,
    pub title: String,
    pub episode_id: i32,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    pub opening_crawl: String,
    /// Names of the characters appearing in the film, ordered by character id.
    pub characters: Vec<String>,
}

impl Film {
    pub fn from_entity(
        entity: entity::film::Model,
        characters: Vec<entity::character::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            episode_id: entity.episode_id,
            director: entity.director,
            producer: entity.producer,
            release_date: entity.release_date,
            opening_crawl: entity.opening_crawl,
            characters: characters.into_iter().map(|c| c.name).collect(),
        }
    }

    pub fn into_dto(self) -> FilmDto {
        FilmDto {
            id: self.id,
            title: self.title,
            episode_id: self.episode_id,
            director: self.director,
            producer: self.producer,
            release_date: self.release_date,
            opening_crawl: self.opening_crawl,
            characters: self.characters,
        }
    }
}

/// Parameters for creating a new film
#[derive(Debug, Clone)]
pub struct CreateFilmParam {
    pub title: String,
    pub episode_id: i32,
    pub director: String,
    pub producer: String,
    pub release_date: NaiveDate,
    pub opening_crawl: String,
}

impl CreateFilmParam {
    pub fn from_dto(dto: CreateFilmDto) -> Self {
        Self {
            title: dto.title,
            episode_id: dto.episode_id,
            director: dto.director,
            producer: dto.producer,
            release_date: dto.release_date,
            opening_crawl: dto.opening_crawl,
        }
    }
}
