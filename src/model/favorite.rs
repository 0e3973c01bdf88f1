use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    api::UnknownVariantError, character::CharacterDto, planet::PlanetDto,
};

/// Kind of item a favorite points at, as spelled in the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteCategory {
    People,
    Planets,
}

impl FavoriteCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Planets => "planets",
        }
    }
}

impl fmt::Display for FavoriteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteCategory {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "people" => Ok(Self::People),
            "planets" => Ok(Self::Planets),
            _ => Err(UnknownVariantError {
                kind: "favorite category",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub category: FavoriteCategory,
    pub item_id: i32,
}

/// The item a favorite resolves to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FavoriteItemDto {
    People(CharacterDto),
    Planet(PlanetDto),
}
