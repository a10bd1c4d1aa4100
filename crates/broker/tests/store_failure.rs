use std::sync::Arc;

use async_trait::async_trait;
use catalog::{Course, CourseStore, OrderTerm, StorePredicate};

mod helpers;
use helpers::{get, make_router_with_store};

struct DownStore;

#[async_trait]
impl CourseStore for DownStore {
    async fn find_courses(
        &self,
        _predicate: &StorePredicate,
        _ordering: &[OrderTerm],
    ) -> anyhow::Result<Vec<Course>> {
        anyhow::bail!("password authentication failed for user \"courses\"")
    }

    async fn count_courses(&self, _predicate: &StorePredicate) -> anyhow::Result<usize> {
        anyhow::bail!("connection refused")
    }
}

#[tokio::test]
async fn store_error_is_generic_500() {
    let app = make_router_with_store(Arc::new(DownStore));
    let (status, v) = get(&app, "/courses?limit=5").await;

    assert_eq!(status, 500);
    assert_eq!(v["success"], false);
    assert_eq!(v["error"], "Failed to fetch courses");
    assert_eq!(v["data"], serde_json::json!([]));
    assert_eq!(v["hasNextPage"], false);
    assert_eq!(v["count"], 0);

    let id = v["errorId"].as_str().expect("errorId");
    assert_eq!(id.len(), 36);
    assert!(!v.to_string().contains("password"));
}

#[tokio::test]
async fn healthz_reports_unavailable() {
    let app = make_router_with_store(Arc::new(DownStore));
    let (status, v) = get(&app, "/healthz").await;
    assert_eq!(status, 503);
    assert_eq!(v["status"], "unavailable");
}
