// HTTP request handlers
use crate::domain::selection::Selection;
use crate::domain::telemetry::Metric;
use crate::infrastructure::http_response::json_response;
use crate::infrastructure::json_mapper::{dashboard_to_payload, launches_to_payload};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

/// Launch id that selects the aggregate across all launches.
const ALL_LAUNCHES: &str = "all";
/// Compare value that disables the overlay.
const NO_COMPARE: &str = "none";

#[derive(Debug, Deserialize, Default)]
pub struct DashboardQuery {
    pub compare: Option<String>,
    pub metric: Option<String>,
    pub compare_metric: Option<String>,
    pub zoom: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the launch catalog for the selectors
pub async fn list_launches(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let payload = launches_to_payload(state.launch_service.list_launches());

    match json_response(&payload, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Build the dashboard for one selection. The path id is a launch id or
/// "all"; the query carries the rest of the UI selection.
pub async fn get_dashboard(
    Path(id): Path<String>,
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let compress = accepts_brotli(&headers);
    let selection = selection_from_request(id, &query);

    let dashboard = state
        .dashboard_service
        .build_dashboard(&state.store, &selection);
    let payload = dashboard_to_payload(dashboard);

    match json_response(&payload, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Check if the client accepts Brotli compression
fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get("accept-encoding")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.contains("br"))
        .unwrap_or(false)
}

/// Materialize the UI selection from path and query. Unknown metric values
/// fall back to the thrust default rather than failing the request; the
/// selectors only ever emit the five known names.
fn selection_from_request(id: String, query: &DashboardQuery) -> Selection {
    let launch = (id != ALL_LAUNCHES).then_some(id);
    let compare = query
        .compare
        .clone()
        .filter(|c| !c.is_empty() && c != NO_COMPARE);

    Selection {
        launch,
        compare,
        metric: parse_metric(query.metric.as_deref()),
        compare_metric: parse_metric(query.compare_metric.as_deref()),
        zoom: query.zoom.as_deref().and_then(Metric::parse),
    }
}

fn parse_metric(value: Option<&str>) -> Metric {
    value.and_then(Metric::parse).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_path_selects_aggregate() {
        let selection = selection_from_request("all".to_string(), &DashboardQuery::default());
        assert_eq!(selection.launch, None);
        assert_eq!(selection.compare, None);
        assert_eq!(selection.metric, Metric::Thrust);
        assert_eq!(selection.zoom, None);
    }

    #[test]
    fn test_none_compare_disables_overlay() {
        let query = DashboardQuery {
            compare: Some("none".to_string()),
            ..DashboardQuery::default()
        };
        let selection = selection_from_request("S001".to_string(), &query);
        assert_eq!(selection.launch.as_deref(), Some("S001"));
        assert_eq!(selection.compare, None);
    }

    #[test]
    fn test_full_query_materializes() {
        let query = DashboardQuery {
            compare: Some("S002".to_string()),
            metric: Some("thrust".to_string()),
            compare_metric: Some("pressure".to_string()),
            zoom: Some("vibration".to_string()),
        };
        let selection = selection_from_request("S001".to_string(), &query);
        assert_eq!(selection.compare.as_deref(), Some("S002"));
        assert_eq!(selection.metric, Metric::Thrust);
        assert_eq!(selection.compare_metric, Metric::Pressure);
        assert_eq!(selection.zoom, Some(Metric::Vibration));
    }

    #[test]
    fn test_unknown_metric_falls_back_to_thrust() {
        let query = DashboardQuery {
            metric: Some("warp_factor".to_string()),
            ..DashboardQuery::default()
        };
        let selection = selection_from_request("S001".to_string(), &query);
        assert_eq!(selection.metric, Metric::Thrust);
    }
}
