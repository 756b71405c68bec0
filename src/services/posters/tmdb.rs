//! TMDB poster provider
//!
//! One `GET {api_url}/movie/{id}?api_key=..&language=..` per movie. The
//! response's `poster_path` is appended to the public image CDN base.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Poster, TmdbMovie},
    services::posters::PosterProvider,
};

pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";
pub const POSTER_SIZE: &str = "w500";

#[derive(Clone)]
pub struct TmdbPosterProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    language: String,
}

impl TmdbPosterProvider {
    pub fn new(
        api_key: Option<String>,
        api_url: String,
        language: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_language.clone(),
            config.poster_timeout(),
        )
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Config(
                    "TMDB_API_KEY environment variable is not set or accessible".to_string(),
                )
            })
    }

    /// Fetches movie details. URLs are stripped from transport errors since
    /// they carry the API key.
    async fn fetch_movie(&self, api_key: &str, movie_id: i64) -> AppResult<TmdbMovie> {
        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", api_key), ("language", self.language.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Transport(e.without_url()))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {} for movie {}",
                response.status(),
                movie_id
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.without_url()))?;

        parse_movie(movie_id, &body)
    }
}

/// Decodes a `/movie/{id}` body; anything undecodable is the API's fault
fn parse_movie(movie_id: i64, body: &str) -> AppResult<TmdbMovie> {
    serde_json::from_str(body).map_err(|e| {
        AppError::ExternalApi(format!(
            "TMDB response for movie {} could not be decoded: {}",
            movie_id, e
        ))
    })
}

/// Full image URL for a TMDB poster path
pub fn poster_url(poster_path: &str) -> String {
    if poster_path.starts_with('/') {
        format!("{}{}{}", IMAGE_BASE_URL, POSTER_SIZE, poster_path)
    } else {
        format!("{}{}/{}", IMAGE_BASE_URL, POSTER_SIZE, poster_path)
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterProvider {
    async fn resolve_poster(&self, movie_id: i64) -> AppResult<Poster> {
        let api_key = self.api_key()?;

        let poster = match self.fetch_movie(api_key, movie_id).await {
            Ok(movie) => match movie.poster_path.filter(|path| !path.trim().is_empty()) {
                Some(path) => Poster::found(poster_url(&path)),
                None => Poster::missing(),
            },
            Err(e) => {
                tracing::warn!(
                    movie_id,
                    error = %e,
                    provider = self.name(),
                    "Failed to fetch poster"
                );
                Poster::failed(format!("Failed to fetch poster: {}", e))
            }
        };

        tracing::info!(
            movie_id,
            status = ?poster.status,
            provider = self.name(),
            "Poster resolved"
        );

        Ok(poster)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
