use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{error, info};

use pn_core::ArticleFilter;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub source: Option<String>,
    pub q: Option<String>,
    #[serde(default)]
    pub skip: usize,
    pub limit: Option<usize>,
}

pub async fn list_articles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Response {
    let filter = ArticleFilter {
        category: params.category,
        source: params.source,
        query: params.q,
        skip: params.skip,
        limit: params.limit,
    };
    match state.storage.list(&filter).await {
        Ok(articles) => Json(articles).into_response(),
        Err(e) => internal_error(e),
    }
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Response {
    match state.storage.stats().await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => internal_error(e),
    }
}

pub async fn categories(State(state): State<Arc<AppState>>) -> Response {
    Json(state.manager.categories()).into_response()
}

pub async fn sources(State(state): State<Arc<AppState>>) -> Response {
    Json(state.manager.source_names()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub url: String,
}

pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ClassifyRequest>,
) -> Response {
    let category = state
        .manager
        .classify(&request.title, &request.content, &request.url);
    Json(serde_json::json!({ "category": category })).into_response()
}

/// Kick off a full pipeline run as a detached background task. A run can
/// take minutes; nothing here blocks the response.
pub async fn trigger_scrape(State(state): State<Arc<AppState>>) -> Response {
    let storage = state.storage.clone();
    let manager = state.manager.clone();
    tokio::spawn(async move {
        let articles = manager.run_all().await;
        let report = pn_storage::persist_articles(storage.as_ref(), &articles).await;
        info!(
            "💾 Background scrape stored: {} fetched, {} saved, {} duplicates, {} errors",
            report.fetched, report.saved, report.duplicates, report.errors
        );
    });
    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "status": "started" })),
    )
        .into_response()
}

fn internal_error(e: pn_core::Error) -> Response {
    error!("Request failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": e.to_string() })),
    )
        .into_response()
}
