use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{HwsnapError, Result};

use super::metrics::BatteryStatus;
use super::parsers::{parse_pmset, parse_sysfs_battery};
use super::platform::PowerPlatform;
use super::power_profile::PowerProfile;

/// Collects battery snapshots from the fast report or the sysfs scan.
pub struct BatteryCollector {
    platform: Arc<dyn PowerPlatform>,
    power: Arc<PowerProfile>,
}

impl BatteryCollector {
    pub fn new(platform: Arc<dyn PowerPlatform>, power: Arc<PowerProfile>) -> Self {
        Self { platform, power }
    }

    /// Collect every battery on the host.
    ///
    /// Returns [`HwsnapError::NoBatteryData`] instead of an empty list. A panic
    /// raised by a probe is caught here and returned as
    /// [`HwsnapError::BatteryCollection`].
    pub fn collect(&self) -> Result<Vec<BatteryStatus>> {
        match panic::catch_unwind(AssertUnwindSafe(|| self.collect_unguarded())) {
            Ok(result) => result,
            Err(payload) => {
                let msg = panic_message(payload.as_ref());
                log::warn!("Battery probe panicked: {}", msg);
                Err(HwsnapError::battery_collection(msg))
            }
        }
    }

    fn collect_unguarded(&self) -> Result<Vec<BatteryStatus>> {
        match self.platform.battery_report() {
            Ok(out) => {
                let power = self.power.cached_power_data();
                let batts = parse_pmset(&out, &power);
                if !batts.is_empty() {
                    return Ok(batts);
                }
                log::debug!("Fast battery report had no battery lines");
            }
            Err(e) => log::debug!("Fast battery report unavailable: {}", e),
        }

        let batts: Vec<BatteryStatus> = self
            .platform
            .sysfs_batteries()
            .iter()
            .map(|entry| parse_sysfs_battery(&entry.capacity, entry.status.as_deref()))
            .collect();

        if batts.is_empty() {
            return Err(HwsnapError::NoBatteryData);
        }
        Ok(batts)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
