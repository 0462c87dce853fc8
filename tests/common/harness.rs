//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use title_guard::embedding::MiniLmEmbedder;
use title_guard::engine::Engine;
use title_guard::gateway::{AppState, create_router_with_state};
use title_guard::policy::PolicyEngine;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const HEALTH_POLL_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    pub titles: Vec<String>,
    pub restricted_words: Vec<String>,
    pub forbidden_affixes: Vec<String>,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            titles: vec![
                "Space Adventure".to_string(),
                "The Morning Herald".to_string(),
                "Daily Chronicle".to_string(),
            ],
            restricted_words: vec!["banned".to_string(), "police".to_string()],
            forbidden_affixes: vec!["xx".to_string(), "the".to_string()],
        }
    }
}

impl TestServerConfig {
    pub fn with_titles<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.titles = titles.into_iter().map(Into::into).collect();
        self
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Polls `/healthz` until it answers 200 or `timeout` elapses.
pub async fn wait_for_healthy(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let url = format!("http://{addr}/healthz");
    let deadline = tokio::time::Instant::now() + timeout;

    while tokio::time::Instant::now() < deadline {
        if let Ok(resp) = reqwest::get(&url).await
            && resp.status().is_success()
        {
            return Ok(());
        }
        tokio::time::sleep(interval).await;
    }

    Err(ServerStartupError::Timeout)
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("server did not report healthy in time")]
    Timeout,
    #[error("could not bind test listener: {0}")]
    Bind(#[from] std::io::Error),
    #[error("engine construction failed: {0}")]
    Engine(String),
}

/// Spawns a server backed by the stub MiniLM embedder (deterministic, no model files).
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let embedder = MiniLmEmbedder::stub().map_err(|e| ServerStartupError::Engine(e.to_string()))?;
    let policy = PolicyEngine::new(&config.restricted_words, &config.forbidden_affixes);
    let engine = Engine::build(embedder, config.titles, policy)
        .map_err(|e| ServerStartupError::Engine(e.to_string()))?;

    let app = create_router_with_state(AppState::new(Arc::new(engine)));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_healthy(local_addr, HEALTH_TIMEOUT, HEALTH_POLL_INTERVAL).await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}
