pub mod config;
pub mod error;
pub mod http_api;
pub mod search;

use std::sync::Arc;

use axum::Router;
use catalog::{JsonlStore, RetryStore};
use coursefinder::CourseSearch;
use tracing_subscriber::{fmt, EnvFilter};

use config::BrokerConfig;
use http_api::{router, AppState};

/// JSONL catalog behind the retry wrapper.
pub fn build_app(cfg: &BrokerConfig) -> Router {
    let store = RetryStore::new(
        JsonlStore::new(&cfg.catalog_path),
        cfg.store_retries,
        cfg.store_backoff(),
    );
    let search = Arc::new(CourseSearch::new(Arc::new(store)));
    router(AppState { search })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
