use axum::extract::RawQuery;
use axum::response::{Html, IntoResponse, Response};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::{Datelike, Utc};

use crate::catalog::{CatalogQuery, CatalogState};
use crate::error::AppError;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(catalog))
        .route("/uisyllabi", get(catalog))
        .route("/courses", get(list_courses))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

fn current_year() -> i32 {
    Utc::now().year()
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn catalog(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Html<String> {
    let query = CatalogQuery::from_raw(raw.as_deref());
    let page_state = CatalogState::from_events(query.into_events());
    Html(state.catalog.render(&page_state, current_year()).await)
}

async fn list_courses(State(state): State<AppState>) -> Response {
    let outcome = state.listing_page().render().await;
    (outcome.status(), Html(outcome.render_html(current_year()).await)).into_response()
}

async fn not_found() -> AppError {
    AppError::NotFound
}
