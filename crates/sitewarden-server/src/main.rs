use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use sitewarden_api::{AppState, router};
use sitewarden_store::Store;
use sitewarden_store::persist::JsonFile;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sitewarden=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("SITEWARDEN_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("SITEWARDEN_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;
    let data_path = std::env::var("SITEWARDEN_DATA_PATH").unwrap_or_else(|_| "data.json".into());

    // Store, loaded from the data file if one exists
    let store: AppState = Arc::new(Store::open(Box::new(JsonFile::new(&data_path))));
    info!("Store backed by {}", data_path);

    // CORS is permissive: the extension's popup, content script, and admin
    // page all call from their own origins.
    let app = router(store)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Sitewarden backend listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
