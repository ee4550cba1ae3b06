// Telemetry log repository implementations
use crate::application::telemetry_repository::{TelemetryError, TelemetryRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches the CSV log over HTTP.
#[derive(Debug, Clone)]
pub struct HttpLogRepository {
    url: String,
}

impl HttpLogRepository {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[async_trait]
impl TelemetryRepository for HttpLogRepository {
    async fn fetch_log(&self) -> Result<String, TelemetryError> {
        let client = reqwest::Client::new();
        let response = client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(TelemetryError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// Reads the CSV log from the local filesystem.
#[derive(Debug, Clone)]
pub struct LogFileRepository {
    path: String,
}

impl LogFileRepository {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait]
impl TelemetryRepository for LogFileRepository {
    async fn fetch_log(&self) -> Result<String, TelemetryError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TelemetryError::Read {
                path: self.path.clone(),
                source,
            })
    }
}

pub fn is_remote_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Pick the repository implementation for a configured source string.
pub fn repository_for_source(source: &str) -> Arc<dyn TelemetryRepository> {
    if is_remote_source(source) {
        Arc::new(HttpLogRepository::new(source.to_string()))
    } else {
        Arc::new(LogFileRepository::new(source.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_detection() {
        assert!(is_remote_source("http://localhost:9000/rocket_logs.csv"));
        assert!(is_remote_source("https://example.com/rocket_logs.csv"));
        assert!(!is_remote_source("data/rocket_logs.csv"));
        assert!(!is_remote_source("/var/lib/telemetry/rocket_logs.csv"));
    }

    #[tokio::test]
    async fn test_file_repository_reports_missing_file() {
        let repo = LogFileRepository::new("data/does_not_exist.csv".to_string());
        let err = repo.fetch_log().await.unwrap_err();
        assert!(matches!(err, TelemetryError::Read { .. }));
    }
}
