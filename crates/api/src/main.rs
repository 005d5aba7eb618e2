use anyhow::Context;

use mesto_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mesto_observability::init();

    let config = Config::from_env();
    let port = config.port;

    let app = mesto_api::app::build_app(config)
        .await
        .context("failed to build application")?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind 0.0.0.0:{port}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
