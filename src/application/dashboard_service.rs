// Dashboard service - Use case for building chart models from the store
use crate::domain::dashboard::{ChartData, Dashboard, SeriesData, ViewMode};
use crate::domain::launch::LaunchCatalog;
use crate::domain::selection::Selection;
use crate::domain::telemetry::{LaunchSeries, Metric, TelemetryStore};
use crate::infrastructure::config::ChartStyles;

#[derive(Clone)]
pub struct DashboardService {
    catalog: LaunchCatalog,
    styles: ChartStyles,
}

impl DashboardService {
    pub fn new(catalog: LaunchCatalog, styles: ChartStyles) -> Self {
        Self { catalog, styles }
    }

    /// Derive the chart models for one selection. Reads only the frozen store
    /// and the selection; never fails. Absent compare data shows up as an
    /// empty second series that rendering degrades gracefully around.
    pub fn build_dashboard(&self, store: &TelemetryStore, selection: &Selection) -> Dashboard {
        let current = store.current_series(selection.launch.as_deref());
        let compare = store.compare_series(selection.compare.as_deref());

        let title = match selection.launch.as_deref() {
            Some(id) => format!(
                "{} Static Fire Telemetry",
                self.catalog.display_name(id).unwrap_or(id)
            ),
            None => "All Launches Static Fire Telemetry".to_string(),
        };

        if selection.zoom.is_some() {
            let chart = self.focus_chart(selection, current, compare);
            Dashboard::new(title, ViewMode::Zoom, vec![chart])
        } else if selection.is_combined() {
            let chart = self.focus_chart(selection, current, compare);
            Dashboard::new(title, ViewMode::Combined, vec![chart])
        } else {
            let charts = Metric::ALL
                .iter()
                .map(|&metric| self.metric_chart(metric, selection, current, compare))
                .collect();
            Dashboard::new(title, ViewMode::Overview, charts)
        }
    }

    /// One overview panel: current vs compare values of a single metric under
    /// that metric's fixed color pair and suggested Y-axis maximum.
    fn metric_chart(
        &self,
        metric: Metric,
        selection: &Selection,
        current: &LaunchSeries,
        compare: &LaunchSeries,
    ) -> ChartData {
        let style = self.styles.style(metric);
        ChartData::new(
            metric.as_str().to_string(),
            format!("{} ({})", metric.label(), metric.unit()),
            metric.unit().to_string(),
            style.suggested_max,
            current.labels.clone(),
            vec![
                SeriesData::new(
                    self.series_name(metric, selection.launch.as_deref(), "Selected"),
                    style.color.clone(),
                    current.metric(metric).to_vec(),
                ),
                SeriesData::new(
                    self.series_name(metric, selection.compare.as_deref(), "Compared"),
                    style.compare_color.clone(),
                    compare.metric(metric).to_vec(),
                ),
            ],
        )
    }

    /// The zoom and combined-selection chart. Content follows the metric
    /// dropdowns (current[metric] vs compare[compare_metric]) under the fixed
    /// focus color pair; the zoomed panel index plays no part here. The
    /// suggested maximum is resolved by the metric-priority tie-break.
    fn focus_chart(
        &self,
        selection: &Selection,
        current: &LaunchSeries,
        compare: &LaunchSeries,
    ) -> ChartData {
        let metric = selection.metric;
        let compare_metric = selection.compare_metric;
        ChartData::new(
            metric.as_str().to_string(),
            format!("{} ({})", metric.label(), metric.unit()),
            metric.unit().to_string(),
            self.styles.suggested_max_for_pair(metric, compare_metric),
            current.labels.clone(),
            vec![
                SeriesData::new(
                    self.series_name(metric, selection.launch.as_deref(), "Selected"),
                    self.styles.focus_color.clone(),
                    current.metric(metric).to_vec(),
                ),
                SeriesData::new(
                    self.series_name(compare_metric, selection.compare.as_deref(), "Compared"),
                    self.styles.focus_compare_color.clone(),
                    compare.metric(compare_metric).to_vec(),
                ),
            ],
        )
    }

    /// Series legend text: metric, unit, and the launch display name, with a
    /// placeholder when no launch id resolves a catalog name.
    fn series_name(&self, metric: Metric, launch: Option<&str>, placeholder: &str) -> String {
        let name = launch
            .and_then(|id| self.catalog.display_name(id))
            .unwrap_or(placeholder);
        format!("{} ({}) - {}", metric.label(), metric.unit(), name)
    }
}
