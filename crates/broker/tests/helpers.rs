// path: crates/broker/tests/helpers.rs
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use broker::http_api::{router, AppState};
use catalog::{Course, CourseStore, Examination, MemoryStore};
use coursefinder::CourseSearch;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub fn make_router_with_store(store: Arc<dyn CourseStore>) -> Router {
    let search = Arc::new(CourseSearch::new(store));
    router(AppState { search })
}

pub fn make_router(courses: Vec<Course>) -> Router {
    make_router_with_store(Arc::new(MemoryStore::new(courses)))
}

pub fn course(id: &str, code: &str) -> Course {
    Course {
        id: id.to_string(),
        code: code.to_string(),
        name: format!("Kurs {code}"),
        credits: 6.0,
        campus: "Linköping".to_string(),
        main_field_of_study: vec!["Datateknik".to_string()],
        advanced: false,
        semester: vec![7],
        period: vec![1],
        block: vec![1],
        examination: vec![Examination {
            code: "TEN1".to_string(),
            name: Some("Skriftlig tentamen".to_string()),
            credits: Some(4.0),
        }],
    }
}

/// 25 courses, ids `c00`..`c24`, codes in the same order.
pub fn catalog_25() -> Vec<Course> {
    (0..25)
        .map(|i| course(&format!("c{i:02}"), &format!("TDDE{i:02}")))
        .collect()
}

pub async fn get(app: &Router, uri: &str) -> (u16, serde_json::Value) {
    let resp: Response<Body> = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, v)
}

/// `/courses?...` uri with `examinations` percent-encoded.
pub fn exam_uri(query: &str, examinations: &str) -> String {
    let mut enc = String::new();
    for b in examinations.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => enc.push(b as char),
            _ => enc.push_str(&format!("%{b:02X}")),
        }
    }
    format!("/courses?{query}&examinations={enc}")
}
