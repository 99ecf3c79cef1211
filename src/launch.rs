//! Launch dispatcher.
//!
//! Once the bootstrap guard has passed, control is handed to the HTTP
//! server with a fixed binding and never returns until shutdown. The
//! bootstrap does not supervise, restart, or monitor the server after
//! dispatch.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;

/// Network binding for the served application.
///
/// Constructed explicitly and passed into [`serve`] rather than read from
/// ambient state. The binding is fixed for this deployment: all
/// interfaces, port 8080. A configurable binding is a future surface,
/// deliberately not this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchSettings {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for LaunchSettings {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
        }
    }
}

impl LaunchSettings {
    /// Socket address to bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Hand control to the HTTP server.
///
/// Binds the listener, logs the bound address, and serves the application
/// router until SIGTERM or Ctrl+C. This call is terminal from the
/// bootstrap's perspective.
pub async fn serve(settings: LaunchSettings, app: Router) -> anyhow::Result<()> {
    let addr = settings.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("serving search application on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
