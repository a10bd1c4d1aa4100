use std::sync::Arc;

use catalog::{Course, CourseStore, StorePredicate};
use tracing::debug;

use crate::filter::{apply_residual, compile_filters, FilterSelection};
use crate::order::build_ordering;
use crate::paginator::paginate;
use crate::params::{PageRequest, SearchParams};

#[derive(Debug, Clone)]
pub struct SearchPage {
    pub courses: Vec<Course>,
    pub next_cursor: Option<String>,
    pub has_next_page: bool,
    pub total_count: usize,
}

/// Runs the search pipeline against an injected store.
pub struct CourseSearch {
    store: Arc<dyn CourseStore>,
}

impl CourseSearch {
    pub fn new(store: Arc<dyn CourseStore>) -> Self {
        Self { store }
    }

    /// Store errors propagate untouched; nothing is paginated on failure.
    pub async fn search(&self, params: &SearchParams) -> anyhow::Result<SearchPage> {
        let page = PageRequest::from_params(params);
        let selection = FilterSelection::from_params(params);
        let compiled = compile_filters(&selection);
        let ordering = build_ordering(page.sort_by, page.sort_order);

        let fetched = self.store.find_courses(&compiled.store, &ordering).await?;
        let fetched_len = fetched.len();

        let filtered = apply_residual(fetched, &compiled.residual);
        let total_count = filtered.len();

        let out = paginate(filtered, page.cursor.as_deref(), page.limit);
        debug!(
            fetched = fetched_len,
            total = total_count,
            page = out.items.len(),
            has_next = out.has_next_page,
            "course search"
        );

        Ok(SearchPage {
            courses: out.items,
            next_cursor: out.next_cursor,
            has_next_page: out.has_next_page,
            total_count,
        })
    }

    /// Size of the whole catalog.
    pub async fn catalog_size(&self) -> anyhow::Result<usize> {
        self.store.count_courses(&StorePredicate::default()).await
    }
}
