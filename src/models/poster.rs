use serde::{Deserialize, Serialize};

/// Shown when TMDB has no poster for a movie
pub const NO_POSTER_PLACEHOLDER: &str =
    "https://via.placeholder.com/500x750?text=No+Poster+Available";

/// Shown when the poster lookup itself failed
pub const ERROR_POSTER_PLACEHOLDER: &str =
    "https://via.placeholder.com/500x750?text=Error+Fetching+Poster";

/// How a poster URL was obtained
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PosterStatus {
    /// TMDB returned a poster path
    Found,
    /// TMDB answered without a poster path
    Missing,
    /// The lookup failed; `url` is the error placeholder
    Failed { reason: String },
}

/// Displayable poster for a single movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poster {
    pub url: String,
    pub status: PosterStatus,
}

impl Poster {
    pub fn found(url: String) -> Self {
        Self {
            url,
            status: PosterStatus::Found,
        }
    }

    pub fn missing() -> Self {
        Self {
            url: NO_POSTER_PLACEHOLDER.to_string(),
            status: PosterStatus::Missing,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            url: ERROR_POSTER_PLACEHOLDER.to_string(),
            status: PosterStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, PosterStatus::Failed { .. })
    }
}

/// Subset of the TMDB `/movie/{id}` response we care about
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub poster_path: Option<String>,
}
