// Telemetry data domain models
use std::collections::HashMap;

/// The five measured telemetry channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Thrust,
    Pressure,
    Temperature,
    Vibration,
    HeatShieldTemp,
}

impl Metric {
    /// Fixed panel order for the overview grid; also the zoom click-index order.
    pub const ALL: [Metric; 5] = [
        Metric::Thrust,
        Metric::Pressure,
        Metric::Temperature,
        Metric::Vibration,
        Metric::HeatShieldTemp,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Thrust => "thrust",
            Metric::Pressure => "pressure",
            Metric::Temperature => "temperature",
            Metric::Vibration => "vibration",
            Metric::HeatShieldTemp => "heat_shield_temp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Thrust => "Thrust",
            Metric::Pressure => "Pressure",
            Metric::Temperature => "Temperature",
            Metric::Vibration => "Vibration",
            Metric::HeatShieldTemp => "Heat Shield Temp",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Metric::Thrust => "N",
            Metric::Pressure => "bar",
            Metric::Temperature => "°C",
            Metric::Vibration => "g",
            Metric::HeatShieldTemp => "°C",
        }
    }

    pub fn parse(value: &str) -> Option<Metric> {
        match value {
            "thrust" => Some(Metric::Thrust),
            "pressure" => Some(Metric::Pressure),
            "temperature" => Some(Metric::Temperature),
            "vibration" => Some(Metric::Vibration),
            "heat_shield_temp" => Some(Metric::HeatShieldTemp),
            _ => None,
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Thrust
    }
}

/// One data row of the static-fire log.
#[derive(Debug, Clone)]
pub struct TelemetrySample {
    pub launch_id: String,
    pub timestamp: String,
    pub stage: String,
    pub thrust: f64,
    pub pressure: f64,
    pub temperature: f64,
    pub vibration: f64,
    pub heat_shield_temp: f64,
}

impl TelemetrySample {
    /// Display label for this sample: the clock suffix of the raw timestamp
    /// plus the stage annotation, e.g. "10:30:45 (boost)".
    pub fn time_label(&self) -> String {
        format!("{} ({})", clock_suffix(&self.timestamp), self.stage)
    }
}

/// Last 8 characters of the raw timestamp, intended to pick the HH:MM:SS tail
/// out of an ISO-8601-like stamp. Shorter stamps are used whole. The stamp is
/// never parsed as a date.
fn clock_suffix(timestamp: &str) -> &str {
    match timestamp.char_indices().rev().nth(7) {
        Some((idx, _)) => &timestamp[idx..],
        None => timestamp,
    }
}

/// Ordered display labels plus five parallel metric sequences, index-aligned.
/// Rows keep the order they were encountered in the source log.
#[derive(Debug, Clone, Default)]
pub struct LaunchSeries {
    pub labels: Vec<String>,
    pub thrust: Vec<f64>,
    pub pressure: Vec<f64>,
    pub temperature: Vec<f64>,
    pub vibration: Vec<f64>,
    pub heat_shield_temp: Vec<f64>,
}

impl LaunchSeries {
    pub const fn empty() -> Self {
        Self {
            labels: Vec::new(),
            thrust: Vec::new(),
            pressure: Vec::new(),
            temperature: Vec::new(),
            vibration: Vec::new(),
            heat_shield_temp: Vec::new(),
        }
    }

    /// Append one sample under the given display label, keeping all six
    /// sequences the same length.
    pub fn push(&mut self, label: String, sample: &TelemetrySample) {
        self.labels.push(label);
        self.thrust.push(sample.thrust);
        self.pressure.push(sample.pressure);
        self.temperature.push(sample.temperature);
        self.vibration.push(sample.vibration);
        self.heat_shield_temp.push(sample.heat_shield_temp);
    }

    pub fn metric(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Thrust => &self.thrust,
            Metric::Pressure => &self.pressure,
            Metric::Temperature => &self.temperature,
            Metric::Vibration => &self.vibration,
            Metric::HeatShieldTemp => &self.heat_shield_temp,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

static EMPTY_SERIES: LaunchSeries = LaunchSeries::empty();

/// The frozen telemetry state: every row across all launches, plus per-launch
/// buckets created lazily on first occurrence. Built once at startup and
/// immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct TelemetryStore {
    aggregate: LaunchSeries,
    launches: HashMap<String, LaunchSeries>,
}

impl TelemetryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one sample to both the per-launch bucket and the aggregate
    /// bucket. Aggregate labels are prefixed with the launch id.
    pub fn ingest(&mut self, sample: TelemetrySample) {
        let time_label = sample.time_label();
        self.aggregate
            .push(format!("{} - {}", sample.launch_id, time_label), &sample);
        self.launches
            .entry(sample.launch_id.clone())
            .or_default()
            .push(time_label, &sample);
    }

    pub fn aggregate(&self) -> &LaunchSeries {
        &self.aggregate
    }

    pub fn launch(&self, id: &str) -> Option<&LaunchSeries> {
        self.launches.get(id)
    }

    pub fn launch_count(&self) -> usize {
        self.launches.len()
    }

    pub fn sample_count(&self) -> usize {
        self.aggregate.len()
    }

    /// The series charts are built from: a specific launch when one is
    /// selected (unknown ids resolve to the empty series), otherwise the
    /// aggregate across all launches.
    pub fn current_series(&self, launch: Option<&str>) -> &LaunchSeries {
        match launch {
            Some(id) => self.launch(id).unwrap_or(&EMPTY_SERIES),
            None => self.aggregate(),
        }
    }

    /// The overlay series: the compare launch when one is selected, otherwise
    /// the empty series (never the aggregate).
    pub fn compare_series(&self, compare: Option<&str>) -> &LaunchSeries {
        match compare {
            Some(id) => self.launch(id).unwrap_or(&EMPTY_SERIES),
            None => &EMPTY_SERIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(launch_id: &str, timestamp: &str, stage: &str) -> TelemetrySample {
        TelemetrySample {
            launch_id: launch_id.to_string(),
            timestamp: timestamp.to_string(),
            stage: stage.to_string(),
            thrust: 1000.0,
            pressure: 50.0,
            temperature: 300.0,
            vibration: 5.0,
            heat_shield_temp: 800.0,
        }
    }

    #[test]
    fn test_metric_parse_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::parse(metric.as_str()), Some(metric));
        }
        assert_eq!(Metric::parse("stress"), None);
    }

    #[test]
    fn test_time_label_uses_clock_suffix() {
        let s = sample("S001", "2024-01-01T10:30:45", "boost");
        assert_eq!(s.time_label(), "10:30:45 (boost)");
    }

    #[test]
    fn test_short_timestamp_used_whole() {
        let s = sample("S001", "T+12s", "boost");
        assert_eq!(s.time_label(), "T+12s (boost)");
    }

    #[test]
    fn test_push_keeps_sequences_aligned() {
        let mut series = LaunchSeries::default();
        series.push("a".to_string(), &sample("S001", "2024-01-01T10:30:45", "boost"));
        series.push("b".to_string(), &sample("S001", "2024-01-01T10:30:46", "coast"));

        assert_eq!(series.len(), 2);
        for metric in Metric::ALL {
            assert_eq!(series.metric(metric).len(), series.labels.len());
        }
    }

    #[test]
    fn test_store_resolution_rules() {
        let mut store = TelemetryStore::new();
        store.ingest(sample("S001", "2024-01-01T10:30:45", "boost"));
        store.ingest(sample("S002", "2024-01-01T11:00:00", "boost"));

        assert_eq!(store.current_series(None).len(), 2);
        assert_eq!(store.current_series(Some("S001")).len(), 1);
        assert!(store.current_series(Some("S999")).is_empty());
        assert!(store.compare_series(None).is_empty());
        assert_eq!(store.compare_series(Some("S002")).len(), 1);
    }

    #[test]
    fn test_aggregate_labels_are_prefixed() {
        let mut store = TelemetryStore::new();
        store.ingest(sample("S001", "2024-01-01T10:30:45", "boost"));

        assert_eq!(store.aggregate().labels[0], "S001 - 10:30:45 (boost)");
        assert_eq!(store.launch("S001").unwrap().labels[0], "10:30:45 (boost)");
    }
}
