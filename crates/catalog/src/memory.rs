use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::order::sort_courses;
use crate::{Course, CourseStore, OrderTerm, StorePredicate};

/// Store over an in-process course list. Also the evaluation engine behind
/// [`crate::JsonlStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    courses: Arc<Vec<Course>>,
}

impl MemoryStore {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses: Arc::new(courses),
        }
    }

    pub fn query(&self, predicate: &StorePredicate, ordering: &[OrderTerm]) -> Vec<Course> {
        select(&self.courses, predicate, ordering)
    }
}

pub(crate) fn select(
    courses: &[Course],
    predicate: &StorePredicate,
    ordering: &[OrderTerm],
) -> Vec<Course> {
    let mut out: Vec<Course> = courses
        .iter()
        .filter(|c| predicate.matches(c))
        .cloned()
        .collect();
    sort_courses(&mut out, ordering);
    out
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn find_courses(
        &self,
        predicate: &StorePredicate,
        ordering: &[OrderTerm],
    ) -> Result<Vec<Course>> {
        Ok(self.query(predicate, ordering))
    }

    async fn count_courses(&self, predicate: &StorePredicate) -> Result<usize> {
        Ok(self.courses.iter().filter(|c| predicate.matches(c)).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::course;
    use crate::{Direction, OrderField};

    #[tokio::test]
    async fn find_filters_and_orders_without_limit() {
        let mut courses: Vec<Course> = (0..30)
            .map(|i| course(&format!("{i:03}"), &format!("TDDE{:02}", 30 - i)))
            .collect();
        courses[3].campus = "Norrköping".into();
        let store = MemoryStore::new(courses);

        let pred = StorePredicate {
            campus: vec!["Linköping".into()],
            ..Default::default()
        };
        let got = store
            .find_courses(&pred, &[OrderTerm::new(OrderField::Code, Direction::Asc)])
            .await
            .unwrap();

        assert_eq!(got.len(), 29);
        assert!(got.windows(2).all(|w| w[0].code <= w[1].code));
        assert_eq!(store.count_courses(&pred).await.unwrap(), 29);
        assert_eq!(store.count_courses(&StorePredicate::default()).await.unwrap(), 30);
    }
}
