use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::domain_error::DomainError;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Animals,
    Food,
    Places,
    Science,
    Tech,
    Music,
}

const GENERAL: &str = "general";
const ANIMALS: &str = "animals";
const FOOD: &str = "food";
const PLACES: &str = "places";
const SCIENCE: &str = "science";
const TECH: &str = "tech";
const MUSIC: &str = "music";

impl Category {
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Animals,
        Category::Food,
        Category::Places,
        Category::Science,
        Category::Tech,
        Category::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => GENERAL,
            Category::Animals => ANIMALS,
            Category::Food => FOOD,
            Category::Places => PLACES,
            Category::Science => SCIENCE,
            Category::Tech => TECH,
            Category::Music => MUSIC,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_lowercase().as_str() {
            GENERAL => Ok(Self::General),
            ANIMALS => Ok(Self::Animals),
            FOOD => Ok(Self::Food),
            PLACES => Ok(Self::Places),
            SCIENCE => Ok(Self::Science),
            TECH => Ok(Self::Tech),
            MUSIC => Ok(Self::Music),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}
