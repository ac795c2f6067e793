//! Observability infrastructure for logging and tracing
//!
//! Installs the process-wide `tracing` subscriber. Library code in core and
//! infra only emits events; binaries and demos decide where they go by
//! calling [`init_tracing`] once at startup.
//!
//! ## Filtering
//!
//! `RUST_LOG` is honoured when set (`RUST_LOG=opsboard_core=debug`), and
//! [`DEFAULT_FILTER`] applies otherwise.
//!
//! ```rust,no_run
//! use opsboard_infra::observability::{init_tracing, LogFormat};
//!
//! if let Err(e) = init_tracing(LogFormat::Json) {
//!     eprintln!("tracing disabled: {e}");
//! }
//! ```

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or blank
pub const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Tracing setup error type
#[derive(Debug, thiserror::Error)]
pub enum ObservabilityError {
    /// `RUST_LOG` (or the default) is not a valid filter directive
    #[error("Invalid log filter '{directive}': {message}")]
    InvalidFilter {
        /// Directive as given
        directive: String,
        /// Parser message
        message: String,
    },

    /// Another global subscriber was installed first
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result type for tracing setup
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Filter from `RUST_LOG`, falling back to `default_directive`
pub fn build_filter(default_directive: &str) -> ObservabilityResult<EnvFilter> {
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default_directive.to_string());

    EnvFilter::try_new(&directive)
        .map_err(|e| ObservabilityError::InvalidFilter { directive, message: e.to_string() })
}

/// Install the global fmt subscriber
///
/// # Errors
/// Returns `InvalidFilter` for a bad `RUST_LOG` and `AlreadyInitialized`
/// when called twice in one process.
pub fn init_tracing(format: LogFormat) -> ObservabilityResult<()> {
    let filter = build_filter(DEFAULT_FILTER)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    installed.map_err(|e| ObservabilityError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(?format, "Tracing initialized");
    Ok(())
}
