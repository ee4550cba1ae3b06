// Repository trait for telemetry log access
use async_trait::async_trait;
use thiserror::Error;

/// Fetch-stage failures. These are the only fatal-to-the-session conditions:
/// per-row parse issues never surface as errors.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to fetch telemetry log")]
    Fetch(#[from] reqwest::Error),

    #[error("telemetry source returned HTTP {0}")]
    Status(u16),

    #[error("failed to read telemetry log file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[async_trait]
pub trait TelemetryRepository: Send + Sync {
    /// Fetch the raw CSV text of the static-fire log.
    async fn fetch_log(&self) -> Result<String, TelemetryError>;
}
