// Application layer - Use cases and ports
pub mod dashboard_service;
pub mod ingest_service;
pub mod launch_service;
pub mod telemetry_repository;
