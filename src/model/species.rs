use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::UnknownVariantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Mammal,
    Artificial,
    Sentient,
    Gastropod,
    Reptile,
    Amphibian,
    Insectoid,
    Unknown,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mammal => "mammal",
            Self::Artificial => "artificial",
            Self::Sentient => "sentient",
            Self::Gastropod => "gastropod",
            Self::Reptile => "reptile",
            Self::Amphibian => "amphibian",
            Self::Insectoid => "insectoid",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mammal" => Ok(Self::Mammal),
            "artificial" => Ok(Self::Artificial),
            "sentient" => Ok(Self::Sentient),
            "gastropod" => Ok(Self::Gastropod),
            "reptile" => Ok(Self::Reptile),
            "amphibian" => Ok(Self::Amphibian),
            "insectoid" => Ok(Self::Insectoid),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnknownVariantError {
                kind: "classification",
                value: s.to_string(),
            }),
        }
    }
}

/// Sentience designation of a species.
///
/// Rendered as `non_sentient`/`semi_sentient`; the hyphenated spellings are
/// accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Designation {
    Sentient,
    #[serde(alias = "non-sentient")]
    NonSentient,
    #[serde(alias = "semi-sentient")]
    SemiSentient,
    Unknown,
}

impl Designation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sentient => "sentient",
            Self::NonSentient => "non_sentient",
            Self::SemiSentient => "semi_sentient",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Designation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Designation {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sentient" => Ok(Self::Sentient),
            "non_sentient" | "non-sentient" => Ok(Self::NonSentient),
            "semi_sentient" | "semi-sentient" => Ok(Self::SemiSentient),
            "unknown" => Ok(Self::Unknown),
            _ => Err(UnknownVariantError {
                kind: "designation",
                value: s.to_string(),
            }),
        }
    }
}

/// A species. Unlike characters, exposes its homeworld by id rather than name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpeciesDto {
    pub id: i32,
    pub name: String,
    pub classification: Classification,
    pub designation: Designation,
    pub average_height: f64,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan_in_years: String,
    pub language: String,
    pub homeworld_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSpeciesDto {
    pub name: String,
    pub classification: Classification,
    pub designation: Designation,
    pub average_height: f64,
    pub skin_colors: String,
    pub hair_colors: String,
    pub eye_colors: String,
    pub average_lifespan_in_years: String,
    pub language: String,
    pub homeworld_id: i32,
}
