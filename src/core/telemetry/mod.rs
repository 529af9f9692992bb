//! Hardware telemetry core.
//!
//! Collectors for battery, thermal and sensor state, the power profile cache
//! they share, and the text parsers that turn probe output into records.

mod battery;
mod collector;
mod metrics;
pub mod parsers;
mod platform;
mod power_cache;
mod power_profile;
mod sensors;
mod thermal;

pub use battery::BatteryCollector;
pub use collector::Telemetry;
pub use metrics::{
    BatteryStatus, ChargeState, CpuTempSource, SensorReading, TelemetrySnapshot, ThermalStatus,
    CELSIUS, UNKNOWN_STATUS,
};
pub use parsers::PowerData;
pub use platform::{PowerPlatform, SysfsBatteryEntry};
pub use power_cache::{Clock, PowerDataCache, SystemClock, DEFAULT_POWER_CACHE_TTL};
pub use power_profile::PowerProfile;
pub use sensors::{filter_readings, RawTemperature, SensorCollector, SensorSource};
pub use thermal::ThermalCollector;
