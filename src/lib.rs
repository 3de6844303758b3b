pub mod api;
pub mod config;
pub mod core_state;
pub mod flow;
pub mod greeting;
pub mod models;
pub mod prompts;
pub mod report;
pub mod risk;
pub mod session;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::{Config, DashboardAccess};
use crate::core_state::CoreState;

/// Install the global tracing subscriber. `RUST_LOG` wins over the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Serve the API until Ctrl-C.
pub async fn run(config: Config) -> Result<(), String> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Fail fast on an unreadable store rather than on the first request.
    let core = CoreState::new(config);
    let users = core.load_users().map_err(|e| e.to_string())?;
    tracing::info!(
        store = %core.store().path().display(),
        users = users.len(),
        reports = %core.config.report_dir.display(),
        "User store loaded"
    );
    if core.config.dashboard_access == DashboardAccess::Open {
        tracing::warn!("Hospital dashboard is open: every user's history is readable without login");
    }

    let addr = core.config.addr;
    let mut server = api::start_api_server(Arc::new(core), addr).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Cannot listen for Ctrl-C: {e}"))?;

    server.shutdown();
    server.stopped().await;
    Ok(())
}
