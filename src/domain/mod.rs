// Domain layer - Core data models
pub mod dashboard;
pub mod launch;
pub mod selection;
pub mod telemetry;
