use std::sync::Arc;

use super::metrics::{CpuTempSource, ThermalStatus};
use super::parsers::{
    estimate_cpu_temp, parse_battery_temperature, parse_fan_speed, parse_thermal_level,
};
use super::platform::PowerPlatform;
use super::power_profile::PowerProfile;

/// Collects fan speed and a CPU temperature from progressively coarser sources.
pub struct ThermalCollector {
    platform: Arc<dyn PowerPlatform>,
    power: Arc<PowerProfile>,
}

impl ThermalCollector {
    pub fn new(platform: Arc<dyn PowerPlatform>, power: Arc<PowerProfile>) -> Self {
        Self { platform, power }
    }

    /// Never fails; an all-zero status means no thermal data on this host.
    pub fn collect(&self) -> ThermalStatus {
        let mut thermal = ThermalStatus::default();

        let out = self.power.system_power_output();
        if !out.is_empty() {
            thermal.fan_speed = parse_fan_speed(&out).unwrap_or(0);
        }

        match self.platform.battery_temperature() {
            Ok(raw) => {
                if let Some(celsius) = parse_battery_temperature(&raw) {
                    thermal.cpu_temp = celsius;
                    thermal.cpu_temp_source = CpuTempSource::BatterySensor;
                    return thermal;
                }
            }
            Err(e) => log::debug!("Battery temperature unavailable: {}", e),
        }

        match self.platform.cpu_thermal_level() {
            Ok(raw) => {
                if let Some(level) = parse_thermal_level(&raw) {
                    thermal.cpu_temp = estimate_cpu_temp(level);
                    thermal.cpu_temp_source = CpuTempSource::ThermalLevelEstimate;
                }
            }
            Err(e) => log::debug!("CPU thermal level unavailable: {}", e),
        }

        thermal
    }
}
