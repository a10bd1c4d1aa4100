use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use coursefinder::{CourseSearch, SearchParams};

use crate::error::ApiError;
use crate::search::types::CoursesResponse;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<CourseSearch>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/courses", get(list_courses))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Repeated keys are folded by [`SearchParams::from_pairs`] rather than
/// rejected.
pub async fn list_courses(
    State(st): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<CoursesResponse>, ApiError> {
    let Query(pairs) = pairs.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let params = SearchParams::from_pairs(pairs);

    let page = st.search.search(&params).await.map_err(ApiError::store)?;
    Ok(Json(page.into()))
}

pub async fn healthz(State(st): State<AppState>) -> (StatusCode, Json<Value>) {
    match st.search.catalog_size().await {
        Ok(courses) => (StatusCode::OK, Json(json!({ "status": "ok", "courses": courses }))),
        Err(err) => {
            tracing::warn!(error = %err, "healthz: store unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
