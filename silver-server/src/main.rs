//! Silver HTTP server.
//!
//! ```bash
//! cargo run -p silver-server -- --port 4000
//! curl http://localhost:4000/silver/state
//! curl -X POST -H 'content-type: application/json' \
//!     -d '{"words": 12}' http://localhost:4000/silver/drain
//! ```

use anyhow::Context;
use silver_core::Character;
use silver_server::config::USAGE;
use silver_server::{AppState, Command, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with_target(false)
        .init();

    let config = match ServerConfig::from_env_and_args() {
        Ok(Command::Serve(config)) => config,
        Ok(Command::Help) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(e) => {
            eprint!("Error: {e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let silver = Character::new();
    info!(
        name = silver.name(),
        state = %silver.state(),
        bind = %config.bind,
        "starting silver server"
    );
    silver_server::serve(&config, AppState::new(silver), shutdown_signal())
        .await
        .with_context(|| format!("serve http on {}", config.bind))?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
