use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::{Course, CourseStore, OrderTerm, StorePredicate};

/// Wraps a store and retries failed calls with doubling backoff.
#[derive(Debug, Clone)]
pub struct RetryStore<S> {
    inner: S,
    retries: u32,
    backoff: Duration,
}

impl<S: CourseStore> RetryStore<S> {
    pub fn new(inner: S, retries: u32, backoff: Duration) -> Self {
        Self {
            inner,
            retries,
            backoff,
        }
    }

    async fn attempt<T, F, Fut>(&self, op: &'static str, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut delay = self.backoff;
        let mut attempt = 0u32;
        loop {
            match call().await {
                Ok(v) => return Ok(v),
                Err(err) if attempt < self.retries && is_transient(&err) => {
                    attempt += 1;
                    warn!(op, attempt, error = %err, "store call failed, retrying");
                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2);
                }
                Err(err) => return Err(err),
            }
        }
    }
}

// A malformed catalog line fails the same way on every read.
fn is_transient(err: &anyhow::Error) -> bool {
    err.downcast_ref::<serde_json::Error>().is_none()
}

#[async_trait]
impl<S: CourseStore> CourseStore for RetryStore<S> {
    async fn find_courses(
        &self,
        predicate: &StorePredicate,
        ordering: &[OrderTerm],
    ) -> Result<Vec<Course>> {
        self.attempt("find_courses", || self.inner.find_courses(predicate, ordering))
            .await
    }

    async fn count_courses(&self, predicate: &StorePredicate) -> Result<usize> {
        self.attempt("count_courses", || self.inner.count_courses(predicate))
            .await
    }
}
