// Dashboard domain model

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Five independent per-metric charts.
    Overview,
    /// One chart overlaying two different metrics from two launches.
    Combined,
    /// One full-width chart for the clicked panel.
    Zoom,
}

#[derive(Debug, Clone)]
pub struct SeriesData {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn new(name: String, color: String, values: Vec<f64>) -> Self {
        Self { name, color, values }
    }
}

/// One chart panel: the shared label axis, a suggested Y-axis maximum, and
/// exactly two series (the compare series has empty values when no compare
/// launch is selected).
#[derive(Debug, Clone)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub unit: String,
    pub suggested_max: f64,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(
        id: String,
        title: String,
        unit: String,
        suggested_max: f64,
        labels: Vec<String>,
        series: Vec<SeriesData>,
    ) -> Self {
        Self {
            id,
            title,
            unit,
            suggested_max,
            labels,
            series,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub mode: ViewMode,
    pub charts: Vec<ChartData>,
}

impl Dashboard {
    pub fn new(title: String, mode: ViewMode, charts: Vec<ChartData>) -> Self {
        Self {
            title,
            mode,
            charts,
        }
    }
}
