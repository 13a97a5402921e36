//! HTTP serve command

use crate::game::RoundController;
use crate::server::create_router;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Start a round and serve the game until Ctrl+C
///
/// # Errors
///
/// Returns an error if the first round cannot be started, the runtime cannot
/// be built, or the address cannot be bound.
pub fn run_server(game: RoundController, addr: SocketAddr) -> Result<()> {
    game.start_round().context("Failed to start the first round")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    runtime.block_on(serve(Arc::new(game), addr))
}

async fn serve(game: Arc<RoundController>, addr: SocketAddr) -> Result<()> {
    let app = create_router(game);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("Server is running on http://{addr}. Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown requested");
}
