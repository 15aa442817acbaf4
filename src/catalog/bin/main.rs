include!("../../lib.rs");
use std::net::SocketAddr;
use crate::books::factory::create_book_repository;
use crate::catalog::controller::build_router;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> LibraryResult<()> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let _ = create_book_repository(&config).init().await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(AppState::new(config));

    tracing::info!(%addr, "Server running on port {}", addr.port());
    axum::Server::try_bind(&addr)
        .map_err(|err| LibraryError::runtime(format!("failed to bind {} {}", addr, err).as_str(), None))?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| LibraryError::runtime(format!("server failed {}", err).as_str(), None))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
