//! Single-page front end: a searchable title picker, a "Recommend" button
//! and a row of five poster panels.

use axum::{extract::State, http::StatusCode, response::Html, Form};
use minijinja::{context, Environment};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{MovieRecord, Showcase},
    routes::AppState,
    services::build_showcase,
};

const PAGE_TITLE: &str = "Movie Recommender System";

/// The `.html` suffix turns on HTML autoescaping
const PAGE_TEMPLATE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Debug, Default, Deserialize)]
pub struct SelectionForm {
    #[serde(default)]
    pub movie: Option<String>,
}

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let html = render_page(state.catalog.table().movies(), None, None, None)?;
    Ok(Html(html))
}

pub async fn recommend(
    State(state): State<AppState>,
    Form(form): Form<SelectionForm>,
) -> AppResult<(StatusCode, Html<String>)> {
    let movies = state.catalog.table().movies();
    let selection = form.movie.as_deref();

    let (status, html) =
        match build_showcase(&state.catalog, state.posters.as_ref(), selection).await {
            Ok(showcase) => (
                StatusCode::OK,
                render_page(movies, selection, None, Some(&showcase))?,
            ),
            Err(e) => {
                log_failure(&e);
                let message = e.user_message();
                (
                    e.status_code(),
                    render_page(movies, selection, Some(&message), None)?,
                )
            }
        };

    Ok((status, Html(html)))
}

fn log_failure(error: &AppError) {
    if error.status_code().is_server_error() {
        tracing::error!(error = %error, "Recommendation failed");
    } else {
        tracing::info!(error = %error, "Recommendation rejected");
    }
}

/// Renders the page; at most one of `error` and `showcase` is shown
fn render_page(
    movies: &[MovieRecord],
    selection: Option<&str>,
    error: Option<&str>,
    showcase: Option<&Showcase>,
) -> AppResult<String> {
    let mut env = Environment::new();
    env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;

    let html = env.get_template(PAGE_TEMPLATE_NAME)?.render(context! {
        page_title => PAGE_TITLE,
        movies => movies,
        selection => selection.unwrap_or_default(),
        error => error,
        showcase => showcase,
    })?;

    Ok(html)
}
