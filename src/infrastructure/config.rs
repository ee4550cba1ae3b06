use crate::domain::launch::{Launch, LaunchCatalog};
use crate::domain::telemetry::Metric;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetryConfig {
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    /// Filesystem path or http(s) URL of the static-fire CSV log.
    pub source: String,
}

pub fn load_telemetry_config() -> anyhow::Result<TelemetryConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/telemetry"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Per-metric chart styling: the fixed color pair (current series, compare
/// series) and the fixed suggested Y-axis maximum.
#[derive(Debug, Clone)]
pub struct MetricStyle {
    pub color: String,
    pub compare_color: String,
    pub suggested_max: f64,
}

impl MetricStyle {
    fn new(color: &str, compare_color: &str, suggested_max: f64) -> Self {
        Self {
            color: color.to_string(),
            compare_color: compare_color.to_string(),
            suggested_max,
        }
    }
}

/// Static chart styling tables. The defaults carry the canonical palette and
/// axis maxima; config/charts.toml can override any of them.
#[derive(Debug, Clone)]
pub struct ChartStyles {
    thrust: MetricStyle,
    pressure: MetricStyle,
    temperature: MetricStyle,
    vibration: MetricStyle,
    heat_shield_temp: MetricStyle,
    /// Color pair for the zoom/combined chart.
    pub focus_color: String,
    pub focus_compare_color: String,
}

/// Tie-break order for the focus chart's suggested maximum. Heat shield temp
/// is deliberately absent: its maximum is the fallback.
const Y_MAX_PRIORITY: [Metric; 4] = [
    Metric::Thrust,
    Metric::Pressure,
    Metric::Temperature,
    Metric::Vibration,
];

impl ChartStyles {
    pub fn style(&self, metric: Metric) -> &MetricStyle {
        match metric {
            Metric::Thrust => &self.thrust,
            Metric::Pressure => &self.pressure,
            Metric::Temperature => &self.temperature,
            Metric::Vibration => &self.vibration,
            Metric::HeatShieldTemp => &self.heat_shield_temp,
        }
    }

    fn style_mut(&mut self, metric: Metric) -> &mut MetricStyle {
        match metric {
            Metric::Thrust => &mut self.thrust,
            Metric::Pressure => &mut self.pressure,
            Metric::Temperature => &mut self.temperature,
            Metric::Vibration => &mut self.vibration,
            Metric::HeatShieldTemp => &mut self.heat_shield_temp,
        }
    }

    /// Suggested Y-axis maximum when two metrics share one axis: the first
    /// priority metric present in the pair wins, otherwise the heat shield
    /// temp maximum.
    pub fn suggested_max_for_pair(&self, a: Metric, b: Metric) -> f64 {
        for metric in Y_MAX_PRIORITY {
            if a == metric || b == metric {
                return self.style(metric).suggested_max;
            }
        }
        self.style(Metric::HeatShieldTemp).suggested_max
    }
}

impl Default for ChartStyles {
    fn default() -> Self {
        Self {
            thrust: MetricStyle::new("rgba(255, 99, 132, 1)", "rgba(75, 192, 192, 1)", 20000.0),
            pressure: MetricStyle::new("rgba(75, 192, 192, 1)", "rgba(255, 206, 86, 1)", 200.0),
            temperature: MetricStyle::new("rgba(255, 206, 86, 1)", "rgba(54, 162, 235, 1)", 1000.0),
            vibration: MetricStyle::new("rgba(54, 162, 235, 1)", "rgba(153, 102, 255, 1)", 15.0),
            heat_shield_temp: MetricStyle::new(
                "rgba(153, 102, 255, 1)",
                "rgba(255, 99, 132, 1)",
                2000.0,
            ),
            focus_color: "rgba(255, 99, 132, 1)".to_string(),
            focus_compare_color: "rgba(75, 192, 192, 1)".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
struct CatalogOverrides {
    #[serde(default)]
    launches: Vec<LaunchEntry>,
}

#[derive(Debug, Deserialize, Clone)]
struct LaunchEntry {
    id: String,
    name: String,
}

/// Launch catalog: the built-in nine-launch table unless config/launches.toml
/// provides a replacement.
pub fn load_launch_catalog() -> anyhow::Result<LaunchCatalog> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/launches").required(false))
        .build()?;

    let overrides: CatalogOverrides = settings.try_deserialize()?;
    if overrides.launches.is_empty() {
        return Ok(LaunchCatalog::default());
    }
    Ok(LaunchCatalog::new(
        overrides
            .launches
            .into_iter()
            .map(|e| Launch::new(e.id, e.name))
            .collect(),
    ))
}

#[derive(Debug, Deserialize, Default)]
struct StyleOverrides {
    #[serde(default)]
    metrics: Vec<MetricStyleOverride>,
    focus_color: Option<String>,
    focus_compare_color: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetricStyleOverride {
    metric: String,
    color: Option<String>,
    compare_color: Option<String>,
    suggested_max: Option<f64>,
}

/// Chart styles: built-in defaults, selectively overridden by
/// config/charts.toml when present.
pub fn load_chart_styles() -> anyhow::Result<ChartStyles> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/charts").required(false))
        .build()?;

    let overrides: StyleOverrides = settings.try_deserialize()?;
    let mut styles = ChartStyles::default();
    apply_style_overrides(&mut styles, overrides);
    Ok(styles)
}

fn apply_style_overrides(styles: &mut ChartStyles, overrides: StyleOverrides) {
    for entry in overrides.metrics {
        let Some(metric) = Metric::parse(&entry.metric) else {
            tracing::warn!("unknown metric {:?} in chart styles config, skipping", entry.metric);
            continue;
        };
        let style = styles.style_mut(metric);
        if let Some(color) = entry.color {
            style.color = color;
        }
        if let Some(compare_color) = entry.compare_color {
            style.compare_color = compare_color;
        }
        if let Some(suggested_max) = entry.suggested_max {
            style.suggested_max = suggested_max;
        }
    }
    if let Some(color) = overrides.focus_color {
        styles.focus_color = color;
    }
    if let Some(color) = overrides.focus_compare_color {
        styles.focus_compare_color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suggested_maxima() {
        let styles = ChartStyles::default();
        assert_eq!(styles.style(Metric::Thrust).suggested_max, 20000.0);
        assert_eq!(styles.style(Metric::Pressure).suggested_max, 200.0);
        assert_eq!(styles.style(Metric::Temperature).suggested_max, 1000.0);
        assert_eq!(styles.style(Metric::Vibration).suggested_max, 15.0);
        assert_eq!(styles.style(Metric::HeatShieldTemp).suggested_max, 2000.0);
    }

    #[test]
    fn test_suggested_max_tie_break() {
        let styles = ChartStyles::default();
        assert_eq!(
            styles.suggested_max_for_pair(Metric::Pressure, Metric::Vibration),
            200.0
        );
        assert_eq!(
            styles.suggested_max_for_pair(Metric::Vibration, Metric::Pressure),
            200.0
        );
        assert_eq!(
            styles.suggested_max_for_pair(Metric::HeatShieldTemp, Metric::HeatShieldTemp),
            2000.0
        );
        assert_eq!(
            styles.suggested_max_for_pair(Metric::Thrust, Metric::HeatShieldTemp),
            20000.0
        );
    }

    #[test]
    fn test_style_overrides_apply_selectively() {
        let mut styles = ChartStyles::default();
        apply_style_overrides(
            &mut styles,
            StyleOverrides {
                metrics: vec![MetricStyleOverride {
                    metric: "vibration".to_string(),
                    color: Some("rgba(1, 2, 3, 1)".to_string()),
                    compare_color: None,
                    suggested_max: Some(30.0),
                }],
                focus_color: None,
                focus_compare_color: None,
            },
        );

        assert_eq!(styles.style(Metric::Vibration).color, "rgba(1, 2, 3, 1)");
        assert_eq!(styles.style(Metric::Vibration).suggested_max, 30.0);
        // Untouched entries keep their defaults.
        assert_eq!(
            styles.style(Metric::Vibration).compare_color,
            "rgba(153, 102, 255, 1)"
        );
        assert_eq!(styles.style(Metric::Thrust).suggested_max, 20000.0);
    }

    #[test]
    fn test_unknown_metric_override_is_skipped() {
        let mut styles = ChartStyles::default();
        apply_style_overrides(
            &mut styles,
            StyleOverrides {
                metrics: vec![MetricStyleOverride {
                    metric: "stress".to_string(),
                    color: None,
                    compare_color: None,
                    suggested_max: Some(999.0),
                }],
                focus_color: None,
                focus_compare_color: None,
            },
        );
        assert_eq!(styles.style(Metric::Thrust).suggested_max, 20000.0);
    }
}
