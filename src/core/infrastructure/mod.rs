pub mod telemetry;
pub mod transcript;
