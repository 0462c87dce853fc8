//! Title Guard HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use title_guard::config::Config;
use title_guard::embedding::{MiniLmConfig, MiniLmEmbedder};
use title_guard::engine::Engine;
use title_guard::gateway::{AppState, create_router_with_state};
use title_guard::policy::PolicyEngine;
use title_guard::wordlist::{load_titles, load_word_list};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Title Guard starting"
    );

    let titles = load_titles(&config.corpus_path)?;
    let restricted = load_word_list(&config.restricted_words_path)?;
    let affixes = load_word_list(&config.forbidden_affixes_path)?;
    let policy = PolicyEngine::new(&restricted, &affixes);

    let minilm_config = if let Some(path) = &config.model_path {
        MiniLmConfig::new(path.clone())
    } else {
        tracing::warn!("No TITLE_GUARD_MODEL_PATH configured, running embedder in stub mode");
        MiniLmConfig::stub()
    };
    let embedder = MiniLmEmbedder::load(minilm_config)?;

    // Corpus embedding runs the model once per title; keep it off the async workers.
    let engine = tokio::task::spawn_blocking(move || Engine::build(embedder, titles, policy))
        .await??;

    let app = create_router_with_state(AppState::new(Arc::new(engine)));

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Title Guard shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("TITLE_GUARD_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

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
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
