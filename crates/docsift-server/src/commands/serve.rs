//! Serve command - run the HTTP extraction API.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tokio::signal;
use tracing::info;

use docsift_core::DocumentProcessor;

use super::load_config;
use crate::routes;
use crate::state::AppState;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config and API_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// OCR model directory (overrides config)
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(model_dir) = args.model_dir {
        config.ocr.model_dir = model_dir;
    }

    info!("Starting docsift v{}", env!("CARGO_PKG_VERSION"));

    // Model loading and the tesseract version check block
    let processor = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || DocumentProcessor::from_config(&config)).await?
    };
    info!("Primary OCR engine loaded: {}", processor.ocr_enabled());

    let host = config.server.host.clone();
    let port = config.server.port;
    let app = routes::router(AppState::new(config, processor));

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    let addr = listener.local_addr()?;
    info!("docsift listening on {}", addr);
    println!("{} Listening on http://{}", style("✓").green(), addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown...");
        },
    }
}
