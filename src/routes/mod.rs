use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    data::Catalog,
    middleware::{
        make_span_with_request_id, propagate_request_id_layer, set_request_id_layer,
    },
    services::PosterProvider,
};

pub mod movies;
pub mod page;
pub mod recommendations;

/// Shared, read-only application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub posters: Arc<dyn PosterProvider>,
}

impl AppState {
    pub fn new(catalog: Catalog, posters: Arc<dyn PosterProvider>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            posters,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index).post(page::recommend))
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(propagate_request_id_layer())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(movies::list))
        .route("/recommendations", post(recommendations::recommend))
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "movies": state.catalog.table().len(),
        })),
    )
}
