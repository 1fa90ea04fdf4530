use std::sync::Arc;

use pn_core::ArticleStorage;
use pn_scrapers::ScraperManager;

pub struct AppState {
    pub storage: Arc<dyn ArticleStorage>,
    pub manager: Arc<ScraperManager>,
}
