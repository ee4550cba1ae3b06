// Ingest service - One-shot load of the static-fire log into the store
use crate::application::telemetry_repository::{TelemetryError, TelemetryRepository};
use crate::domain::telemetry::{TelemetrySample, TelemetryStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct IngestService {
    repository: Arc<dyn TelemetryRepository>,
}

impl IngestService {
    pub fn new(repository: Arc<dyn TelemetryRepository>) -> Self {
        Self { repository }
    }

    /// Fetch the log and parse it in a single pass. Runs once at startup;
    /// the returned store is frozen for the lifetime of the process.
    pub async fn load_store(&self) -> Result<TelemetryStore, TelemetryError> {
        let raw = self.repository.fetch_log().await?;
        let store = parse_telemetry_log(&raw);
        tracing::info!(
            "telemetry log loaded: {} samples across {} launches",
            store.sample_count(),
            store.launch_count()
        );
        Ok(store)
    }
}

/// Parse raw CSV text into the telemetry store. The header row is discarded
/// and blank lines (including the trailing one from a final newline) are
/// skipped; nothing else is validated. This never fails: malformed cells are
/// coerced, not reported.
pub fn parse_telemetry_log(raw: &str) -> TelemetryStore {
    let mut store = TelemetryStore::new();
    for line in raw.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        store.ingest(parse_row(line));
    }
    store
}

/// Split one data row on commas in the fixed twelve-column order:
/// launch_id, timestamp, thrust, pressure, temperature, vibration, stress,
/// heat_shield_temp, ambient, wind, stage, block. Missing fields default to
/// empty strings; stress, ambient, wind and block are read but not retained.
fn parse_row(line: &str) -> TelemetrySample {
    let mut fields = line.split(',');
    let launch_id = fields.next().unwrap_or("").to_string();
    let timestamp = fields.next().unwrap_or("").to_string();
    let thrust = metric_value(fields.next());
    let pressure = metric_value(fields.next());
    let temperature = metric_value(fields.next());
    let vibration = metric_value(fields.next());
    let _stress = fields.next();
    let heat_shield_temp = metric_value(fields.next());
    let _ambient = fields.next();
    let _wind = fields.next();
    let stage = fields.next().unwrap_or("").to_string();

    TelemetrySample {
        launch_id,
        timestamp,
        stage,
        thrust,
        pressure,
        temperature,
        vibration,
        heat_shield_temp,
    }
}

/// Lossy numeric coercion: a cell that does not parse as a float (or parses
/// as NaN) becomes 0.0. A corrupt cell must not abort the load; the miss is
/// logged at debug level only.
fn metric_value(field: Option<&str>) -> f64 {
    let raw = field.unwrap_or("");
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => {
            if !raw.is_empty() {
                tracing::debug!("bad metric value {:?}, defaulting to 0", raw);
            }
            0.0
        }
    }
}
