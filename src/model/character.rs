use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::UnknownVariantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Femenine,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Femenine => "femenine",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "masculine" => Ok(Self::Masculine),
            "femenine" => Ok(Self::Femenine),
            _ => Err(UnknownVariantError {
                kind: "gender",
                value: s.to_string(),
            }),
        }
    }
}

/// A character ("people" in the API routes).
///
/// `homeworld` is the planet's name, `films` the titles of every film the
/// character appears in, ordered by film id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub weight: f64,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub homeworld: Option<String>,
    pub films: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: String,
    pub gender: Gender,
    pub species_id: i32,
    pub weight: f64,
    pub hair_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub homeworld_id: i32,
}
