//! Domain models for user favorites
//!
//! A favorite stores a category string and an item id that is not a foreign key.
//! Here that pair becomes the tagged `FavoriteItem`, so the kind of item and the
//! table holding it can never disagree.

use crate::{
    model::favorite::{FavoriteCategory, FavoriteDto, FavoriteItemDto},
    server::{
        error::AppError,
        model::{character::Character, planet::Planet},
        util::parse::parse_stored_enum,
    },
};

/// Reference to the item a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteItem {
    People(i32),
    Planet(i32),
}

impl FavoriteItem {
    pub fn new(category: FavoriteCategory, item_id: i32) -> Self {
        match category {
            FavoriteCategory::People => Self::People(item_id),
            FavoriteCategory::Planets => Self::Planet(item_id),
        }
    }

    pub fn category(&self) -> FavoriteCategory {
        match self {
            Self::People(_) => FavoriteCategory::People,
            Self::Planet(_) => FavoriteCategory::Planets,
        }
    }

    pub fn item_id(&self) -> i32 {
        match self {
            Self::People(id) | Self::Planet(id) => *id,
        }
    }
}

/// The favorite domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub item: FavoriteItem,
}

impl Favorite {
    /// Converts an entity model to the favorite domain model
    ///
    /// # Returns
    /// - `Ok(Favorite)` - The converted favorite domain model
    /// - `Err(AppError::InternalErr(ParseStoredEnum))` - Stored category is not a known variant
    pub fn from_entity(entity: entity::favorite::Model) -> Result<Self, AppError> {
        let category: FavoriteCategory = parse_stored_enum("favorite.category", entity.category)?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            item: FavoriteItem::new(category, entity.item_id),
        })
    }

    pub fn into_dto(self) -> FavoriteDto {
        FavoriteDto {
            id: self.id,
            category: self.item.category(),
            item_id: self.item.item_id(),
        }
    }
}

/// The record a favorite resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteTarget {
    People(Character),
    Planet(Planet),
}

impl FavoriteTarget {
    pub fn into_dto(self) -> FavoriteItemDto {
        match self {
            Self::People(character) => FavoriteItemDto::People(character.into_dto()),
            Self::Planet(planet) => FavoriteItemDto::Planet(planet.into_dto()),
        }
    }
}
