use std::cmp::Ordering;

use crate::{
    data::Catalog,
    error::{AppError, AppResult},
    models::Recommendation,
};

/// Number of movies shown per recommendation cycle
pub const RECOMMENDATION_COUNT: usize = 5;

/// Finds the movies most similar to `title`
///
/// Looks up the first exact (case-sensitive) title match, ranks every other
/// movie by its score in the matched similarity row, highest first, and
/// returns up to `limit` of them. Equal scores keep table order. The queried
/// movie is excluded by row, not by rank, so a tie with its own score cannot
/// push it into the results or push another movie out.
pub fn recommend(catalog: &Catalog, title: &str, limit: usize) -> AppResult<Vec<Recommendation>> {
    let table = catalog.table();

    let index = table
        .position(title)
        .ok_or_else(|| AppError::NotFound(format!("Movie '{}' is not in the catalog", title)))?;

    let Some(scores) = catalog.similarity().row(index) else {
        tracing::warn!(
            title = %title,
            index,
            matrix_size = catalog.similarity().size(),
            "No similarity row for movie"
        );
        return Ok(Vec::new());
    };

    let mut ranked: Vec<(usize, f64)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(candidate, _)| *candidate != index && *candidate < table.len())
        .collect();

    // sort_by is stable, which keeps table order among equal scores
    ranked.sort_by(|a, b| descending(a.1, b.1));

    let recommendations: Vec<Recommendation> = ranked
        .into_iter()
        .take(limit)
        .filter_map(|(candidate, score)| {
            table.get(candidate).map(|movie| Recommendation {
                title: movie.title.clone(),
                movie_id: movie.movie_id,
                score,
            })
        })
        .collect();

    tracing::debug!(
        title = %title,
        index,
        results = recommendations.len(),
        "Ranked similar movies"
    );

    Ok(recommendations)
}

/// JSON cannot encode NaN, so every score pair is comparable; `0.0` and
/// `-0.0` compare equal and keep table order
fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
