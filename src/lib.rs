//! HealthSense AI client core.
//!
//! Everything a UI shell needs to drive the app: the typed HTTP client
//! for the backend (`api`), the wire models (`models`), the route table
//! (`routes`), the per-page controllers (`home`, `symptom_checker`,
//! `upload`, `records`, `record_detail`, `chat`), and the presentational
//! mappings (`views`). Controllers are generic over [`api::HealthApi`],
//! so every flow is testable against [`api::MockHealthApi`] without a
//! running backend.

pub mod api;
pub mod chat;
pub mod config;
pub mod home;
pub mod models;
pub mod record_detail;
pub mod records;
pub mod routes;
pub mod symptom_checker;
pub mod upload;
pub mod views;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host binary. `RUST_LOG` wins; otherwise the
/// built-in default filter applies.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
