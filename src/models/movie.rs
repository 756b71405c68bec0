use serde::{Deserialize, Serialize};

/// One row of the movie table
///
/// Row position in the table is the index used by the similarity matrix.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieRecord {
    /// TMDB identifier, used for poster lookups
    pub movie_id: i64,
    /// User-facing title, also the lookup key
    pub title: String,
}

impl MovieRecord {
    pub fn new(movie_id: i64, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
        }
    }
}

/// A movie ranked against the queried title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub movie_id: i64,
    pub score: f64,
}
