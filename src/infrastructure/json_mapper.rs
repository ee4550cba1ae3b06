// Mapper to convert domain models to Chart.js-shaped JSON payloads
use crate::domain::dashboard::{ChartData, Dashboard, SeriesData, ViewMode};
use crate::domain::launch::Launch;
use serde::Serialize;

/// Fill alpha for the translucent area color derived from a series color.
const FILL_ALPHA: &str = "0.2";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    pub title: String,
    pub mode: &'static str,
    pub charts: Vec<ChartPayload>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPayload {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub suggested_max: f64,
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetPayload>,
}

/// One Chart.js dataset: sparse points, no area fill, gentle line tension.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetPayload {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
    pub point_radius: f64,
}

#[derive(Debug, Serialize)]
pub struct LaunchPayload {
    pub id: String,
    pub name: String,
}

pub fn dashboard_to_payload(dashboard: Dashboard) -> DashboardPayload {
    let mode = match dashboard.mode {
        ViewMode::Overview => "overview",
        ViewMode::Combined => "combined",
        ViewMode::Zoom => "zoom",
    };

    let charts: Vec<ChartPayload> = dashboard.charts.into_iter().map(chart_to_payload).collect();

    DashboardPayload {
        title: dashboard.title,
        mode,
        charts,
    }
}

fn chart_to_payload(chart: ChartData) -> ChartPayload {
    let datasets: Vec<DatasetPayload> = chart.series.into_iter().map(series_to_dataset).collect();

    ChartPayload {
        id: chart.id,
        title: chart.title,
        unit: chart.unit,
        suggested_max: chart.suggested_max,
        labels: chart.labels,
        datasets,
    }
}

fn series_to_dataset(series: SeriesData) -> DatasetPayload {
    let background_color = translucent(&series.color);
    DatasetPayload {
        label: series.name,
        data: series.values,
        border_color: series.color,
        background_color,
        fill: false,
        tension: 0.1,
        point_radius: 1.0,
    }
}

pub fn launches_to_payload(launches: Vec<Launch>) -> Vec<LaunchPayload> {
    launches
        .into_iter()
        .map(|l| LaunchPayload {
            id: l.id,
            name: l.name,
        })
        .collect()
}

/// Same hue at reduced opacity: rewrite the alpha channel of an rgba() color,
/// or append an alpha byte to a 6-digit hex color. Anything else passes
/// through unchanged.
fn translucent(color: &str) -> String {
    if let Some(body) = color.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = body.split(',').collect();
        if parts.len() == 4 {
            return format!("rgba({},{},{}, {})", parts[0], parts[1], parts[2], FILL_ALPHA);
        }
    }
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return format!("#{}33", hex);
        }
    }
    color.to_string()
}
