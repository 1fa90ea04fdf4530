use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/stats", get(handlers::stats))
        .route("/api/categories", get(handlers::categories))
        .route("/api/sources", get(handlers::sources))
        .route("/api/classify", post(handlers::classify))
        .route("/api/scrape", post(handlers::trigger_scrape))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::AppState;
    pub use pn_core::{Article, Error, Result};
}
