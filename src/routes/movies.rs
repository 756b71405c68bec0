use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    models::{MovieListQuery, MovieRecord},
    routes::AppState,
};

/// Handler for the movie listing endpoint, optionally filtered by `q`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieListQuery>,
) -> Json<Vec<MovieRecord>> {
    let movies = state
        .catalog
        .table()
        .search(params.q.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();
    Json(movies)
}
