use std::net::SocketAddr;
use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::app::handlers::{calc, landing, static_asset};
use crate::config::cli::LocalAssets;
use crate::core::{AssetStore, ConfigProvider};
use crate::utils::error::{AstroError, Result};

/// 每個請求共用的唯讀狀態
#[derive(Debug, Clone)]
pub struct AppState<S> {
    /// landing page 所在目錄
    pub pages: S,
    pub index_name: String,
    /// `/static` 對應的目錄
    pub statics: S,
}

impl AppState<LocalAssets> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        let index_path = Path::new(config.index_file());
        let pages_dir = index_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let index_name = index_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.index_file().to_string());

        Self {
            pages: LocalAssets::new(pages_dir),
            index_name,
            statics: LocalAssets::new(config.static_dir()),
        }
    }
}

pub fn create_router<S: AssetStore + Clone + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/", get(landing::<S>))
        .route("/static/{*path}", get(static_asset::<S>))
        .route("/api/calc", post(calc))
        .with_state(state)
}

/// 綁定位址並持續服務，直到收到 Ctrl-C
pub async fn run<C: ConfigProvider>(config: &C) -> Result<()> {
    let bind_addr = format!("{}:{}", config.host(), config.port());
    let bind_addr: SocketAddr = bind_addr.parse().map_err(|e| AstroError::InvalidConfigValueError {
        field: "server.host".to_string(),
        value: bind_addr.clone(),
        reason: format!("Invalid bind address: {}", e),
    })?;

    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AstroError::ServerError {
            message: format!("Failed to bind {}: {}", bind_addr, e),
        })?;

    let state = AppState::from_config(config);
    tracing::info!("📄 Landing page: {}", config.index_file());
    tracing::info!("📁 Static folder: {}", config.static_dir());

    serve(listener, create_router(state), shutdown_signal()).await
}

pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Listening on http://{}", local_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AstroError::ServerError {
            message: format!("HTTP server error: {}", e),
        })?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
