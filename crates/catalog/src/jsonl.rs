use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use crate::memory::select;
use crate::{Course, CourseStore, OrderTerm, StorePredicate};

/// Catalog kept as a JSON-lines file, one `Course` per line.
///
/// The file is re-read on every call so edits show up without a restart.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    pub path: PathBuf,
}

impl JsonlStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Vec<Course>> {
        let data = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("catalog: read {}", self.path.display()))?;
        parse_jsonl(&data).with_context(|| format!("catalog: parse {}", self.path.display()))
    }
}

pub fn parse_jsonl(data: &str) -> Result<Vec<Course>> {
    let mut out = Vec::new();
    for (n, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let course: Course =
            serde_json::from_str(line).with_context(|| format!("line {}", n + 1))?;
        out.push(course);
    }
    Ok(out)
}

#[async_trait]
impl CourseStore for JsonlStore {
    async fn find_courses(
        &self,
        predicate: &StorePredicate,
        ordering: &[OrderTerm],
    ) -> Result<Vec<Course>> {
        let courses = self.load().await?;
        Ok(select(&courses, predicate, ordering))
    }

    async fn count_courses(&self, predicate: &StorePredicate) -> Result<usize> {
        let courses = self.load().await?;
        Ok(courses.iter().filter(|c| predicate.matches(c)).count())
    }
}
