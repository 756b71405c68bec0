use serde::{Deserialize, Serialize};

pub mod movie;
pub mod poster;

pub use movie::{MovieRecord, Recommendation};
pub use poster::{Poster, PosterStatus, TmdbMovie, ERROR_POSTER_PLACEHOLDER, NO_POSTER_PLACEHOLDER};

/// Request body for the recommendations endpoint
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    /// Selected title; absent or blank means nothing was selected
    #[serde(default)]
    pub title: Option<String>,
}

/// A recommended movie together with its resolved poster
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecommendedMovie {
    pub title: String,
    pub movie_id: i64,
    pub score: f64,
    pub poster_url: String,
    pub poster_status: PosterStatus,
}

impl RecommendedMovie {
    pub fn new(recommendation: Recommendation, poster: Poster) -> Self {
        Self {
            title: recommendation.title,
            movie_id: recommendation.movie_id,
            score: recommendation.score,
            poster_url: poster.url,
            poster_status: poster.status,
        }
    }
}

/// Everything needed to render one recommendation cycle
#[derive(Debug, Clone, Serialize)]
pub struct Showcase {
    /// Title the user selected
    pub query: String,
    /// Exactly `RECOMMENDATION_COUNT` movies, best match first
    pub recommendations: Vec<RecommendedMovie>,
    /// Non-fatal, per-item problems (e.g. a poster that could not be fetched)
    pub notices: Vec<String>,
}

/// Query parameters for the movie listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct MovieListQuery {
    #[serde(default)]
    pub q: Option<String>,
}
