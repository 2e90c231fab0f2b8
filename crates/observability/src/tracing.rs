//! Subscriber construction.
//!
//! Events go to stderr so that stdout stays reserved for reports. The filter
//! comes from `RUST_LOG` (default `info`), the output shape from
//! `STOCKRISK_LOG_FORMAT`.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "STOCKRISK_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported log format `{0}` (expected json|pretty)")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

impl LogFormat {
    /// Resolve the format from an optional raw value, falling back to JSON.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::parse::<LogFormat>) {
            None => Self::default(),
            Some(Ok(format)) => format,
            Some(Err(err)) => {
                eprintln!("{err}; using json");
                Self::default()
            }
        }
    }

    pub fn from_env() -> Self {
        Self::resolve(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
    }
}

pub fn init() {
    init_with(LogFormat::from_env());
}

pub fn init_with(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
