use std::fmt;
use std::str::FromStr;

use super::duration::PlayDuration;
use crate::domain::DomainError;

/// A theatrical play accepted by the importer
#[derive(Debug, Clone, PartialEq)]
pub struct Play {
    /// Storage identifier, `None` until persisted
    pub id: Option<i64>,

    pub title: String,

    /// Running time
    pub duration: PlayDuration,

    /// Rating on a 0-10 scale
    pub rating: f32,

    pub genre: Genre,

    pub description: String,

    pub screenwriter: String,
}

/// Closed set of play genres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Drama,
    Comedy,
    Romance,
    Musical,
}

/// Name table used for both parsing and display.
/// Lookup is exact: "drama" or " Drama" do not match.
const GENRE_NAMES: [(&str, Genre); 4] = [
    ("Drama", Genre::Drama),
    ("Comedy", Genre::Comedy),
    ("Romance", Genre::Romance),
    ("Musical", Genre::Musical),
];

impl Genre {
    pub fn from_name(name: &str) -> Option<Self> {
        GENRE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, genre)| *genre)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Drama => "Drama",
            Genre::Comedy => "Comedy",
            Genre::Romance => "Romance",
            Genre::Musical => "Musical",
        }
    }
}

impl FromStr for Genre {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::from_name(s).ok_or_else(|| DomainError::UnknownGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Play {
    /// Create a Play that has not been persisted yet
    pub fn new(
        title: String,
        duration: PlayDuration,
        rating: f32,
        genre: Genre,
        description: String,
        screenwriter: String,
    ) -> Self {
        Self {
            id: None,
            title,
            duration,
            rating,
            genre,
            description,
            screenwriter,
        }
    }
}
