use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use movie_recommender::{
    models::{PosterStatus, ERROR_POSTER_PLACEHOLDER, NO_POSTER_PLACEHOLDER},
    services::{PosterProvider, TmdbPosterProvider},
    AppError,
};

const API_KEY: &str = "test-key";

#[derive(Clone, Default)]
struct FakeTmdb {
    hits: Arc<AtomicUsize>,
}

/// Stands in for `GET /movie/{id}`; behaviour is picked by movie id
async fn movie_details(
    State(fake): State<FakeTmdb>,
    Path(movie_id): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.hits.fetch_add(1, Ordering::SeqCst);

    if params.get("api_key").map(String::as_str) != Some(API_KEY)
        || params.get("language").map(String::as_str) != Some("en-US")
    {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match movie_id {
        1 => Json(json!({ "id": 1, "poster_path": "/xyz.jpg" })).into_response(),
        2 => Json(json!({})).into_response(),
        3 => Json(json!({ "poster_path": null })).into_response(),
        4 => Json(json!({ "poster_path": "" })).into_response(),
        5 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        6 => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "poster_path": "/slow.jpg" })).into_response()
        }
        7 => "not json".into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_fake_tmdb() -> (String, FakeTmdb) {
    let fake = FakeTmdb::default();
    let app = Router::new()
        .route("/movie/:id", get(movie_details))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", address), fake)
}

fn provider(api_url: String, api_key: Option<&str>) -> TmdbPosterProvider {
    TmdbPosterProvider::new(
        api_key.map(str::to_string),
        api_url,
        "en-US".to_string(),
        Duration::from_millis(300),
    )
    .unwrap()
}

#[tokio::test]
async fn test_poster_path_is_joined_to_image_base() {
    let (url, _) = spawn_fake_tmdb().await;
    let poster = provider(url, Some(API_KEY)).resolve_poster(1).await.unwrap();

    assert_eq!(poster.status, PosterStatus::Found);
    assert_eq!(poster.url, "https://image.tmdb.org/t/p/w500/xyz.jpg");
    assert!(poster.url.starts_with("https://image.tmdb.org/t/p/"));
}

#[tokio::test]
async fn test_absent_null_or_empty_poster_path_is_no_poster() {
    let (url, _) = spawn_fake_tmdb().await;
    let provider = provider(url, Some(API_KEY));

    for movie_id in [2, 3, 4] {
        let poster = provider.resolve_poster(movie_id).await.unwrap();
        assert_eq!(poster.status, PosterStatus::Missing, "movie {}", movie_id);
        assert_eq!(poster.url, NO_POSTER_PLACEHOLDER);
    }
}

#[tokio::test]
async fn test_http_errors_degrade_to_error_placeholder() {
    let (url, _) = spawn_fake_tmdb().await;
    let provider = provider(url, Some(API_KEY));

    for movie_id in [5, 7, 404] {
        let poster = provider.resolve_poster(movie_id).await.unwrap();
        assert!(poster.is_failed(), "movie {}", movie_id);
        assert_eq!(poster.url, ERROR_POSTER_PLACEHOLDER);
    }
}

#[tokio::test]
async fn test_undecodable_body_is_reported_as_api_error() {
    let (url, _) = spawn_fake_tmdb().await;
    let poster = provider(url, Some(API_KEY)).resolve_poster(7).await.unwrap();

    match poster.status {
        PosterStatus::Failed { reason } => {
            assert!(reason.contains("External API error"), "{}", reason);
            assert!(reason.contains("could not be decoded"), "{}", reason);
        }
        other => panic!("unexpected status {:?}", other),
    }
}

#[tokio::test]
async fn test_timeout_degrades_to_error_placeholder() {
    let (url, _) = spawn_fake_tmdb().await;
    let poster = provider(url, Some(API_KEY)).resolve_poster(6).await.unwrap();

    assert!(poster.is_failed());
    assert_eq!(poster.url, ERROR_POSTER_PLACEHOLDER);
}

#[tokio::test]
async fn test_outcomes_are_distinguishable() {
    let (url, _) = spawn_fake_tmdb().await;
    let provider = provider(url, Some(API_KEY));

    let found = provider.resolve_poster(1).await.unwrap().url;
    let missing = provider.resolve_poster(2).await.unwrap().url;
    let failed = provider.resolve_poster(5).await.unwrap().url;

    assert_ne!(found, missing);
    assert_ne!(found, failed);
    assert_ne!(missing, failed);
}

#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let (url, fake) = spawn_fake_tmdb().await;
    let provider = provider(url, None);

    for movie_id in [1, 2, 5] {
        let result = provider.resolve_poster(movie_id).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }
    assert_eq!(fake.hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_wrong_key_is_reported_without_leaking_it() {
    let (url, fake) = spawn_fake_tmdb().await;
    let poster = provider(url, Some("wrong-key"))
        .resolve_poster(1)
        .await
        .unwrap();

    assert_eq!(fake.hits.load(Ordering::SeqCst), 1);
    match poster.status {
        PosterStatus::Failed { reason } => {
            assert!(reason.contains("401"));
            assert!(!reason.contains("wrong-key"));
        }
        other => panic!("unexpected status {:?}", other),
    }
}
