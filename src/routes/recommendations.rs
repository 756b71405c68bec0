use axum::{extract::State, Extension, Json};
use tower_http::request_id::RequestId;

use crate::{
    error::AppResult,
    middleware::request_id_str,
    models::{RecommendationRequest, Showcase},
    routes::AppState,
    services::build_showcase,
};

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Showcase>> {
    tracing::info!(
        request_id = request_id_str(Some(&request_id)),
        title = request.title.as_deref().unwrap_or_default(),
        "Processing recommendation request"
    );

    let showcase =
        build_showcase(&state.catalog, state.posters.as_ref(), request.title.as_deref()).await?;

    Ok(Json(showcase))
}
