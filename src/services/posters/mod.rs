//! Poster lookup abstraction
//!
//! The showcase flow only needs a movie id turned into something it can put
//! in an `<img>` tag. Keeping that behind a trait lets the HTTP layer be
//! exercised without talking to TMDB.
use crate::{error::AppResult, models::Poster};

pub mod tmdb;

pub use tmdb::TmdbPosterProvider;

/// Trait for poster sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Resolve a displayable poster URL for a movie
    ///
    /// Lookup failures (timeouts, HTTP errors, undecodable bodies) are not
    /// errors: they come back as a `Poster` carrying the error placeholder
    /// and a `Failed` status. The only `Err` is a missing credential, which
    /// is reported before any request is made.
    async fn resolve_poster(&self, movie_id: i64) -> AppResult<Poster>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
