//! Cuidara: clinical core of a caregiver dashboard for geriatric
//! residential care.
//!
//! Records residents and their periodic assessments, and turns raw vital
//! signs, general-status observations and symptom lists into a severity
//! score, a severity classification and a prioritized set of alerts and
//! recommendations. The scoring engine is pure and deterministic; storage,
//! reporting and the optional local-LLM narrative are collaborators wired
//! around it by the caller.

pub mod config;
pub mod export;
pub mod models;
pub mod narrative;
pub mod scoring;
pub mod store;
pub mod validation;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries and integration harnesses.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Cuidara core v{}", config::APP_VERSION);
}
