// path: crates/broker/src/config.rs
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BrokerConfig {
    pub addr: String,
    /// JSON-lines course catalog.
    pub catalog_path: String,
    pub store_retries: u32,
    pub store_backoff_ms: u64,
}

fn default_retries() -> u32 { 2 }
fn default_backoff_ms() -> u64 { 50 }

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".into(),
            catalog_path: "courses.jsonl".into(),
            store_retries: default_retries(),
            store_backoff_ms: default_backoff_ms(),
        }
    }
}

impl BrokerConfig {
    pub fn from_env() -> Self {
        let addr = std::env::var("CF_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
        let catalog_path = std::env::var("CF_CATALOG").unwrap_or_else(|_| "courses.jsonl".into());
        let store_retries = parse_env("CF_STORE_RETRIES").unwrap_or(default_retries());
        let store_backoff_ms = parse_env("CF_STORE_BACKOFF_MS").unwrap_or(default_backoff_ms());

        Self { addr, catalog_path, store_retries, store_backoff_ms }
    }

    pub fn store_backoff(&self) -> Duration {
        Duration::from_millis(self.store_backoff_ms)
    }
}

fn parse_env<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "invalid value, using default");
            None
        }
    }
}
