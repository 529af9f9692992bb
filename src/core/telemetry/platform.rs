use crate::error::{HwsnapError, Result};

/// Raw contents of one `BAT*` directory under the power supply class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysfsBatteryEntry {
    pub name: String,
    pub capacity: String,
    /// `None` when the sibling `status` file is missing or unreadable.
    pub status: Option<String>,
}

/// Trait for host power and thermal probes
///
/// Each method is one capability. Hosts that lack a capability keep the
/// default, which reports it as unsupported. Implementations are provided in
/// the platform layer and selected once at startup.
pub trait PowerPlatform: Send + Sync {
    /// Short identifier such as "macos" or "linux".
    fn name(&self) -> &'static str;

    /// Fast, low-detail battery report (`pmset -g batt`).
    fn battery_report(&self) -> Result<String> {
        Err(HwsnapError::unsupported("fast battery report"))
    }

    /// Whether [`PowerPlatform::power_profile_report`] can ever succeed.
    fn has_power_profile(&self) -> bool {
        false
    }

    /// Slow, high-detail power report (`system_profiler SPPowerDataType`).
    fn power_profile_report(&self) -> Result<String> {
        Err(HwsnapError::unsupported("power profile report"))
    }

    /// Raw battery-adjacent temperature in hundredths of a degree.
    fn battery_temperature(&self) -> Result<String> {
        Err(HwsnapError::unsupported("battery temperature"))
    }

    /// Raw kernel thermal level.
    fn cpu_thermal_level(&self) -> Result<String> {
        Err(HwsnapError::unsupported("cpu thermal level"))
    }

    /// Every battery directory exposing a `capacity` file, ordered by name.
    /// Unreadable capacity files are left out.
    fn sysfs_batteries(&self) -> Vec<SysfsBatteryEntry> {
        Vec::new()
    }
}
