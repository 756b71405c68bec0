use crate::{
    data::Catalog,
    error::{AppError, AppResult},
    models::{Poster, PosterStatus, RecommendedMovie, Showcase},
    services::{
        posters::PosterProvider,
        recommendations::{recommend, RECOMMENDATION_COUNT},
    },
};

pub const NO_SELECTION_MESSAGE: &str = "Please select a movie.";
pub const NO_RECOMMENDATIONS_MESSAGE: &str = "No recommendations found for the selected movie.";

/// Runs one recommendation cycle for the selected title
///
/// 1. Reject an empty selection without touching the catalog or the network
/// 2. Rank similar movies
/// 3. Require a full row of `RECOMMENDATION_COUNT` results
/// 4. Resolve posters one at a time, in ranked order
///
/// A poster problem only affects its own panel: it becomes a placeholder
/// plus a notice, and the remaining lookups still run.
pub async fn build_showcase(
    catalog: &Catalog,
    posters: &dyn PosterProvider,
    selection: Option<&str>,
) -> AppResult<Showcase> {
    let title = selection
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(|| AppError::InvalidInput(NO_SELECTION_MESSAGE.to_string()))?;

    let ranked = recommend(catalog, title, RECOMMENDATION_COUNT)?;

    if ranked.len() < RECOMMENDATION_COUNT {
        tracing::info!(
            title = %title,
            found = ranked.len(),
            "Not enough recommendations to render"
        );
        return Err(AppError::EmptyResult(NO_RECOMMENDATIONS_MESSAGE.to_string()));
    }

    let mut recommendations = Vec::with_capacity(ranked.len());
    let mut notices = Vec::new();

    for recommendation in ranked {
        let poster = match posters.resolve_poster(recommendation.movie_id).await {
            Ok(poster) => poster,
            Err(e) => {
                tracing::error!(
                    movie_id = recommendation.movie_id,
                    error = %e,
                    provider = posters.name(),
                    "Poster lookup could not be attempted"
                );
                Poster::failed(e.to_string())
            }
        };

        if let PosterStatus::Failed { reason } = &poster.status {
            notices.push(format!("{}: {}", recommendation.title, reason));
        }

        recommendations.push(RecommendedMovie::new(recommendation, poster));
    }

    tracing::info!(
        title = %title,
        results = recommendations.len(),
        notices = notices.len(),
        "Showcase built"
    );

    Ok(Showcase {
        query: title.to_string(),
        recommendations,
        notices,
    })
}
