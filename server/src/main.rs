use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use todo_core::MemoryStore;
use todo_server::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("todo_server=info")),
        )
        .init();

    let config = Config::parse();
    let store = if config.seed {
        MemoryStore::seeded()
    } else {
        MemoryStore::new()
    };

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, seeded = config.seed, "listening");

    todo_server::run_until(listener, store, shutdown_signal())
        .await
        .context("server error")?;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
