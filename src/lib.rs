// hwsnap Library - Public API

// Re-export error types
pub mod error;
pub use error::{HwsnapError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::CollectorConfig;
pub use crate::core::telemetry::{BatteryStatus, SensorReading, Telemetry, ThermalStatus};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
