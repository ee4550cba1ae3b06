// Selection state domain model
use super::telemetry::Metric;

/// The UI-owned selection, materialized per request: which launch drives the
/// charts, which launch (if any) is overlaid, which metrics the two metric
/// dropdowns hold, and whether a chart panel is zoomed.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Specific launch id, or None for "all launches" (the aggregate).
    pub launch: Option<String>,
    /// Compare launch id, or None for no comparison.
    pub compare: Option<String>,
    pub metric: Metric,
    pub compare_metric: Metric,
    /// The metric of the clicked panel while zoomed. Which panel was clicked
    /// does not decide the rendered content; the metric dropdowns do.
    pub zoom: Option<Metric>,
}

impl Selection {
    /// Combined-selection mode: one chart overlaying two different metrics
    /// from two different launches. Requires a specific main launch, a
    /// compare launch, and differing metric dropdowns.
    pub fn is_combined(&self) -> bool {
        self.launch.is_some() && self.compare.is_some() && self.metric != self.compare_metric
    }
}
