use std::sync::Arc;

use crate::core::config::CollectorConfig;
use crate::error::Result;
use crate::platform::{detect_platform, SysinfoSensorSource};

use super::battery::BatteryCollector;
use super::metrics::*;
use super::platform::PowerPlatform;
use super::power_cache::PowerDataCache;
use super::power_profile::PowerProfile;
use super::sensors::{SensorCollector, SensorSource};
use super::thermal::ThermalCollector;

/// Entry point for callers polling hardware telemetry.
///
/// Holds one platform implementation and one power profile cache shared by
/// the battery and thermal collectors.
pub struct Telemetry {
    platform: Arc<dyn PowerPlatform>,
    power: Arc<PowerProfile>,
    batteries: BatteryCollector,
    thermal: ThermalCollector,
    sensors: SensorCollector,
}

impl Telemetry {
    /// Build collectors for the current host.
    pub fn new(config: &CollectorConfig) -> Self {
        let platform = detect_platform(config);
        let cache = PowerDataCache::new(config.power_cache_ttl());
        Self::with_parts(platform, cache, Box::new(SysinfoSensorSource::new()))
    }

    /// Build collectors from explicit parts.
    pub fn with_parts(
        platform: Arc<dyn PowerPlatform>,
        cache: PowerDataCache,
        sensor_source: Box<dyn SensorSource>,
    ) -> Self {
        let power = Arc::new(PowerProfile::new(platform.clone(), cache));
        Self {
            batteries: BatteryCollector::new(platform.clone(), power.clone()),
            thermal: ThermalCollector::new(platform.clone(), power.clone()),
            sensors: SensorCollector::new(sensor_source),
            platform,
            power,
        }
    }

    pub fn platform_name(&self) -> &'static str {
        self.platform.name()
    }

    pub fn collect_batteries(&self) -> Result<Vec<BatteryStatus>> {
        self.batteries.collect()
    }

    pub fn collect_thermal(&self) -> ThermalStatus {
        self.thermal.collect()
    }

    pub fn collect_sensors(&self) -> Result<Vec<SensorReading>> {
        self.sensors.collect()
    }

    /// Run all three collectors, recording failures instead of returning them.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        let (batteries, battery_error) = match self.collect_batteries() {
            Ok(batts) => (batts, None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };
        let (sensors, sensor_error) = match self.collect_sensors() {
            Ok(readings) => (readings, None),
            Err(e) => (Vec::new(), Some(e.to_string())),
        };

        TelemetrySnapshot {
            collected_at: chrono::Utc::now(),
            platform: self.platform_name().to_string(),
            batteries,
            battery_error,
            thermal: self.collect_thermal(),
            sensors,
            sensor_error,
        }
    }

    pub fn power_profile(&self) -> &PowerProfile {
        &self.power
    }
}
