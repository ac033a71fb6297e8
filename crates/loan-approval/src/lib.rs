pub mod approval;
pub mod config;
pub mod error;
pub mod telemetry;
