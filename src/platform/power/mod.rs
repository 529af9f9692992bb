//! Host power and thermal probes.
//!
//! One [`PowerPlatform`] implementation per supported OS:
//! - macOS via pmset, system_profiler, ioreg and sysctl
//! - Linux via the power supply sysfs class

mod macos;
mod sysfs;

pub use macos::MacPowerPlatform;
pub use sysfs::{scan_batteries, SysfsPowerPlatform};

use std::sync::Arc;

use crate::core::config::CollectorConfig;
use crate::core::telemetry::PowerPlatform;

/// Host without any supported probe. Every capability reports unsupported.
pub struct GenericPowerPlatform;

impl PowerPlatform for GenericPowerPlatform {
    fn name(&self) -> &'static str {
        "generic"
    }
}

/// Pick the probe set for the host this binary was built for.
pub fn detect_platform(config: &CollectorConfig) -> Arc<dyn PowerPlatform> {
    let platform = build_platform(config);
    log::info!("Using {} power probes", platform.name());
    platform
}

#[cfg(target_os = "macos")]
fn build_platform(config: &CollectorConfig) -> Arc<dyn PowerPlatform> {
    use crate::platform::command::SystemCommandRunner;

    let runner = Arc::new(SystemCommandRunner::new(config.command_timeout()));
    Arc::new(MacPowerPlatform::new(runner, config))
}

#[cfg(target_os = "linux")]
fn build_platform(config: &CollectorConfig) -> Arc<dyn PowerPlatform> {
    Arc::new(SysfsPowerPlatform::new(config.power_supply_root.clone()))
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn build_platform(_config: &CollectorConfig) -> Arc<dyn PowerPlatform> {
    Arc::new(GenericPowerPlatform)
}
