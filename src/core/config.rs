use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tunables for the collectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// How long a power profile report stays fresh
    pub power_cache_ttl_secs: u64,
    /// Deadline for cheap local probes (ioreg, sysctl)
    pub fast_probe_timeout_ms: u64,
    /// Deadline for the power profile report
    pub slow_probe_timeout_ms: u64,
    /// Deadline for commands that don't set their own
    pub command_timeout_ms: u64,
    /// Directory holding the kernel's `BAT*` power supply entries
    pub power_supply_root: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            power_cache_ttl_secs: 30,
            fast_probe_timeout_ms: 500,
            slow_probe_timeout_ms: 3000,
            command_timeout_ms: 2000,
            power_supply_root: PathBuf::from("/sys/class/power_supply"),
        }
    }
}

impl CollectorConfig {
    /// Load from the user config directory, falling back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit path. Missing, empty or unparsable files give defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(CollectorConfig::default());
        }

        let data = fs::read(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(CollectorConfig::default());
        }

        Ok(serde_json::from_slice(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid config {:?}: {}", config_path, e);
            CollectorConfig::default()
        }))
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("hwsnap").join("config.json"))
    }

    pub fn power_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.power_cache_ttl_secs)
    }

    pub fn fast_probe_timeout(&self) -> Duration {
        Duration::from_millis(self.fast_probe_timeout_ms)
    }

    pub fn slow_probe_timeout(&self) -> Duration {
        Duration::from_millis(self.slow_probe_timeout_ms)
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }
}
