pub mod jsonl;
pub mod memory;
pub mod normalizer;
pub mod order;
pub mod predicate;
pub mod retry;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use jsonl::JsonlStore;
pub use memory::MemoryStore;
pub use order::{Direction, OrderField, OrderTerm};
pub use predicate::{PaceConstraint, StorePredicate};
pub use retry::RetryStore;

/// A course as the catalog stores it. The pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub code: String,
    pub name: String,
    pub credits: f64,
    pub campus: String,
    #[serde(default)]
    pub main_field_of_study: Vec<String>,
    #[serde(default)]
    pub advanced: bool,
    pub semester: Vec<u8>,
    pub period: Vec<u8>,
    #[serde(default)]
    pub block: Vec<u8>,
    #[serde(default)]
    pub examination: Vec<Examination>,
}

/// One examination module, e.g. `TEN1` or `LAB2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Examination {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
}

/// Persistence seam consumed by the search pipeline.
///
/// `find_courses` returns every row matching `predicate`, ordered by
/// `ordering`. Stores never truncate: page limits are applied by the caller
/// after any residual filtering.
#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_courses(
        &self,
        predicate: &StorePredicate,
        ordering: &[OrderTerm],
    ) -> Result<Vec<Course>>;

    async fn count_courses(&self, predicate: &StorePredicate) -> Result<usize>;
}
