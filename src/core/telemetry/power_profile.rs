use std::sync::Arc;

use super::parsers::{parse_power_data, PowerData};
use super::platform::PowerPlatform;
use super::power_cache::PowerDataCache;

/// Cached access to the slow power profile report.
///
/// Shared by the battery and thermal collectors, which each need different
/// fields out of the same report.
pub struct PowerProfile {
    platform: Arc<dyn PowerPlatform>,
    cache: PowerDataCache,
}

impl PowerProfile {
    pub fn new(platform: Arc<dyn PowerPlatform>, cache: PowerDataCache) -> Self {
        Self { platform, cache }
    }

    /// Raw report text, refreshed when stale. Empty on hosts without the probe.
    pub fn system_power_output(&self) -> String {
        if !self.platform.has_power_profile() {
            return String::new();
        }
        self.cache
            .get_or_refresh(|| self.platform.power_profile_report())
    }

    /// Battery health and cycle count from the cached report.
    pub fn cached_power_data(&self) -> PowerData {
        let out = self.system_power_output();
        if out.is_empty() {
            return PowerData::default();
        }
        parse_power_data(&out)
    }

    pub fn cache(&self) -> &PowerDataCache {
        &self.cache
    }
}
