//! HTTP host for the Silver character model.
//!
//! Owns one [`silver_core::Character`] behind a mutex and exposes it as
//! JSON over axum. See [`routes`] for the endpoint list.

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;

pub use config::{Command, ServerConfig};
pub use error::{ApiError, ServerError};
pub use routes::{router, AppState};

use std::future::Future;
use tracing::info;

/// Bind `config.bind` and serve `state` until `shutdown` resolves.
pub async fn serve<F>(
    config: &ServerConfig,
    state: AppState,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(bind = %listener.local_addr()?, "silver server listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
