use anyhow::Result;

use broker::config::BrokerConfig;
use broker::{build_app, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = BrokerConfig::from_env();
    let app = build_app(&cfg);

    let listener = tokio::net::TcpListener::bind(&cfg.addr).await?;
    tracing::info!(address = %cfg.addr, catalog = %cfg.catalog_path, "broker listening");
    axum::serve(listener, app).await?;

    Ok(())
}
