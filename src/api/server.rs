//! Server lifecycle: bind, spawn axum in the background, stop on signal.
//!
//! `start_server_on` returns a handle with a shutdown channel; `serve`
//! drives it in the foreground until Ctrl-C.

use std::net::SocketAddr;

use tokio::sync::oneshot;

use crate::api::router::app_router;
use crate::api::types::ApiContext;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Failed to wait for shutdown signal: {0}")]
    Signal(std::io::Error),
}

/// Handle to a running server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Server shutdown signal sent");
        }
    }
}

/// Bind `addr` and serve the application router in a background task.
pub async fn start_server_on(ctx: ApiContext, addr: SocketAddr) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    let addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind { addr, source })?;

    let app = app_router(ctx);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Server received shutdown signal");
        };

        tracing::info!(%addr, "Server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Server error: {e}");
        }

        tracing::info!("Server stopped");
    });

    Ok(ApiServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

/// Serve until Ctrl-C.
pub async fn serve(ctx: ApiContext, addr: SocketAddr) -> Result<(), ServerError> {
    let mut server = start_server_on(ctx, addr).await?;
    tracing::info!("Contact Scan listening on http://{}", server.addr);

    tokio::signal::ctrl_c().await.map_err(ServerError::Signal)?;
    server.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::ServiceConfig;
    use crate::pipeline::ocr::MockOcrEngine;
    use crate::pipeline::processor::Processor;
    use crate::pipeline::translation::MockTranslator;

    fn test_context() -> ApiContext {
        let processor = Processor::new(
            Arc::new(MockOcrEngine::new("name: Kim")),
            Arc::new(MockTranslator::identity()),
        );
        ApiContext::new(processor, &ServiceConfig::default())
    }

    fn loopback() -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], 0))
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let mut server = start_server_on(test_context(), loopback())
            .await
            .expect("server should start");
        assert!(server.addr.port() > 0);

        let url = format!("http://{}/health", server.addr);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "ok");

        server.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let mut first = start_server_on(test_context(), loopback()).await.unwrap();
        let err = start_server_on(test_context(), first.addr)
            .await
            .err()
            .expect("second bind should fail");
        assert!(matches!(err, ServerError::Bind { .. }));
        first.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let mut server = start_server_on(test_context(), loopback()).await.unwrap();
        server.shutdown();
        server.shutdown();
    }
}
