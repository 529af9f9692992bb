use std::sync::Arc;
use std::time::Duration;

use crate::core::config::CollectorConfig;
use crate::core::telemetry::PowerPlatform;
use crate::error::{HwsnapError, Result};
use crate::platform::command::{command_exists, CommandRunner};

const BATTERY_TEMPERATURE_SCRIPT: &str =
    "ioreg -rn AppleSmartBattery | awk '/\"Temperature\"/ {print $3}'";

/// macOS probes: pmset, system_profiler, ioreg and sysctl.
pub struct MacPowerPlatform {
    runner: Arc<dyn CommandRunner>,
    has_pmset: bool,
    fast_timeout: Duration,
    slow_timeout: Duration,
}

impl MacPowerPlatform {
    pub fn new(runner: Arc<dyn CommandRunner>, config: &CollectorConfig) -> Self {
        Self::with_pmset(runner, config, command_exists("pmset"))
    }

    /// Skip the `PATH` lookup for pmset.
    pub fn with_pmset(
        runner: Arc<dyn CommandRunner>,
        config: &CollectorConfig,
        has_pmset: bool,
    ) -> Self {
        Self {
            runner,
            has_pmset,
            fast_timeout: config.fast_probe_timeout(),
            slow_timeout: config.slow_probe_timeout(),
        }
    }
}

impl PowerPlatform for MacPowerPlatform {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn battery_report(&self) -> Result<String> {
        if !self.has_pmset {
            return Err(HwsnapError::unsupported("pmset not found"));
        }
        self.runner.run("pmset", &["-g", "batt"], None)
    }

    fn has_power_profile(&self) -> bool {
        true
    }

    fn power_profile_report(&self) -> Result<String> {
        self.runner
            .run("system_profiler", &["SPPowerDataType"], Some(self.slow_timeout))
    }

    fn battery_temperature(&self) -> Result<String> {
        self.runner
            .run("sh", &["-c", BATTERY_TEMPERATURE_SCRIPT], Some(self.fast_timeout))
    }

    fn cpu_thermal_level(&self) -> Result<String> {
        self.runner.run(
            "sysctl",
            &["-n", "machdep.xcpm.cpu_thermal_level"],
            Some(self.fast_timeout),
        )
    }
}
