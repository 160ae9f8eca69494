use crate::adapters::http;
use crate::config::Settings;
use crate::core::ElementCatalog;
use crate::utils::error::{ApiError, Result};
use std::future::Future;
use tokio::net::TcpListener;

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(settings: &Settings) -> Result<()> {
    let address = settings.address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ApiError::BindError {
            address: address.clone(),
            source,
        })?;

    serve(listener, shutdown_signal()).await
}

/// Serves the isotope API on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // 先建立目錄，確保第一個請求前完成初始化
    let catalog = ElementCatalog::global();
    tracing::info!("📚 Element catalog ready with {} elements", catalog.len());

    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Isotope API listening at http://{}", local_addr);

    axum::serve(listener, http::router(catalog))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("👋 Isotope API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
