//! Movie recommendation lookup service.
//!
//! Loads a precomputed movie table and similarity matrix at startup, ranks the
//! movies most similar to a selected title and decorates them with TMDB
//! posters, served as a small web page and a JSON API.

pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use routes::{create_router, AppState};
