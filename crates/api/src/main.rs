use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use springfield_api::config::ServerConfig;
use springfield_api::router::build_app_router;
use springfield_api::state::AppState;
use springfield_core::DatasetContext;

const DEFAULT_FILTER: &str = "springfield_api=debug,springfield_core=info,tower_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env()?;
    tracing::info!(host = %config.host, port = config.port, "Configuration read");

    let state = load_state(&config)?;
    let app = build_app_router(state, &config)?;

    let host: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("HOST '{}' is not an IP address", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {addr}"))?;
    tracing::info!(%addr, "Dashboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server stopped with an error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Read every dataset before the listener opens; a bad file stops startup.
fn load_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let datasets = DatasetContext::load(&config.data_dir)
        .with_context(|| format!("Could not load datasets from {}", config.data_dir.display()))?;

    if !config.img_dir.is_dir() {
        tracing::warn!(
            img_dir = %config.img_dir.display(),
            "Image directory missing, charts will not display"
        );
    }

    Ok(AppState {
        datasets: Arc::new(datasets),
        config: Arc::new(config.clone()),
    })
}

/// Resolve on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => tracing::info!("Interrupted, shutting down"),
        () = sigterm => tracing::info!("Terminated, shutting down"),
    }
}
