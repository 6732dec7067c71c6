//! HTTP generate service: `POST /api/generate`, `GET /health`.

pub mod error;
pub mod router;
pub mod shutdown;
pub mod upstream;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::server::router::{build_router, AppState};
use crate::server::shutdown::ShutdownManager;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Could not find available port in range {start}-{end}")]
    NoFreePort { start: u16, end: u16 },

    #[error("Failed to build processing backend client: {0}")]
    Backend(#[from] reqwest::Error),

    #[error("bind() must be called before run()")]
    NotBound,

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct GenerateServer {
    pub addr: SocketAddr,
    /// Kept alive between try_bind() and run() so the port stays ours.
    listener: Option<TcpListener>,
    bind_addr: String,
    port_fallback: u16,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl GenerateServer {
    pub fn new(config: &Config) -> Result<Self, ServerError> {
        Ok(Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            bind_addr: config.server.bind_addr.clone(),
            port_fallback: config.server.port_fallback,
            state: AppState::from_config(config)?,
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    /// Binds the configured address, trying the next `port_fallback` ports if busy.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, ServerError> {
        let configured: SocketAddr =
            self.bind_addr
                .parse()
                .map_err(|source| ServerError::InvalidBindAddr {
                    addr: self.bind_addr.clone(),
                    source,
                })?;

        let start = configured.port();
        // Port 0 asks the OS for any free port; no fallback range applies.
        let end = if start == 0 {
            0
        } else {
            start.saturating_add(self.port_fallback)
        };

        for port in start..=end {
            let candidate = SocketAddr::new(configured.ip(), port);
            match TcpListener::bind(candidate).await {
                Ok(listener) => {
                    let actual = listener.local_addr()?;
                    self.addr = actual;
                    self.listener = Some(listener);
                    tracing::info!(
                        addr = %actual,
                        backend_enabled = self.state.backend_enabled(),
                        "generate service bound"
                    );
                    return Ok(actual);
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                }
            }
        }

        Err(ServerError::NoFreePort { start, end })
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serves until Ctrl+C, SIGTERM or [`ServerHandle::shutdown`].
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;
        tracing::info!("Starting generate service on {}", self.addr);

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                if let Err(err) = shutdown.wait_for_shutdown().await {
                    tracing::error!(error = %err, "signal handler failed");
                }
            })
            .into_future()
            .await?;

        tracing::info!("Generate service stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_shutting_down()
    }
}
