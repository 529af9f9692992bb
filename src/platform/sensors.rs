use parking_lot::Mutex;
use sysinfo::Components;

use crate::core::telemetry::{RawTemperature, SensorSource};
use crate::error::Result;

/// Temperature sensors reported by `sysinfo`.
pub struct SysinfoSensorSource {
    components: Mutex<Components>,
}

impl SysinfoSensorSource {
    pub fn new() -> Self {
        Self {
            components: Mutex::new(Components::new_with_refreshed_list()),
        }
    }
}

impl Default for SysinfoSensorSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorSource for SysinfoSensorSource {
    fn temperatures(&self) -> Result<Vec<RawTemperature>> {
        let mut components = self.components.lock();
        components.refresh(true);

        Ok(components
            .iter()
            .filter_map(|comp| {
                comp.temperature().map(|celsius| RawTemperature {
                    key: comp.label().to_string(),
                    celsius: celsius as f64,
                })
            })
            .collect())
    }
}
