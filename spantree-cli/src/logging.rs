//! Logging initialisation for the `spantree` binary.
//!
//! One global `tracing` subscriber writes to `stderr`, leaving `stdout` for
//! the command summary. The `log` facade is bridged into it.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Selects the output format: `human` (default) or `json`.
pub const LOG_FORMAT_ENV: &str = "SPANTREE_LOG_FORMAT";
const DEFAULT_DIRECTIVE: &str = "info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// An environment variable held non-UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending variable.
        name: &'static str,
        /// Underlying failure.
        #[source]
        source: env::VarError,
    },
    /// `SPANTREE_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human`, `text` or `json`")]
    UnsupportedFormat {
        /// Normalised value supplied by the user.
        provided: String,
    },
    /// The global subscriber could not be installed.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Event rendering.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Plain text lines.
    #[default]
    Human,
    /// One JSON object per event, including the current span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Logging settings resolved from the environment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Reads [`LOG_FORMAT_ENV`]; an unset variable selects [`LogFormat::Human`].
    ///
    /// # Errors
    /// Returns [`LoggingError`] when the variable is not UTF-8 or names an
    /// unknown format.
    pub fn from_env() -> Result<Self, LoggingError> {
        let format = match env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse()?,
            Err(env::VarError::NotPresent) => LogFormat::default(),
            Err(source @ env::VarError::NotUnicode(_)) => {
                return Err(LoggingError::InvalidUnicode {
                    name: LOG_FORMAT_ENV,
                    source,
                });
            }
        };
        Ok(Self { format })
    }
}

/// Installs global structured logging once per process.
///
/// The filter comes from `RUST_LOG` and defaults to `info`; `debug` adds the
/// per-algorithm MST spans. Later calls are no-ops. If another subscriber was
/// installed first it is left in place.
///
/// # Errors
/// Returns [`LoggingError`] when [`LoggingConfig::from_env`] fails.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }
    let config = LoggingConfig::from_env()?;
    match install_subscriber(config) {
        Ok(()) | Err(LoggingError::InstallFailed { .. }) => {}
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber(config: LoggingConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let base = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let output = match config.format {
        LogFormat::Human => base.boxed(),
        LogFormat::Json => base
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best-effort: another logger may already own the `log` facade.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}
