// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::launch_service::LaunchService;
use crate::domain::telemetry::TelemetryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Frozen at startup; every request reads it by reference.
    pub store: Arc<TelemetryStore>,
    pub launch_service: LaunchService,
    pub dashboard_service: DashboardService,
}
