pub mod handlers;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::config::ConfigManager;
use crate::fetcher::AdsClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ConfigManager>,
    pub ads_client: Arc<AdsClient>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/telegram-ads", get(handlers::handle_ads_request))
        .route("/api/telegram-ads/table", get(handlers::handle_ads_table))
        .route("/health", get(handlers::handle_health))
        .with_state(state)
}
