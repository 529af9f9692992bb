use std::fs;
use std::path::{Path, PathBuf};

use crate::core::telemetry::{PowerPlatform, SysfsBatteryEntry};

/// Linux power supply class (`/sys/class/power_supply/BAT*`).
pub struct SysfsPowerPlatform {
    root: PathBuf,
}

impl SysfsPowerPlatform {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl PowerPlatform for SysfsPowerPlatform {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn sysfs_batteries(&self) -> Vec<SysfsBatteryEntry> {
        scan_batteries(&self.root)
    }
}

/// Read `capacity` and `status` of every `BAT*` entry under `root`, sorted by name.
pub fn scan_batteries(root: &Path) -> Vec<SysfsBatteryEntry> {
    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("Cannot list {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut dirs: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            name.starts_with("BAT").then(|| (name, entry.path()))
        })
        .collect();
    dirs.sort_by(|a, b| a.0.cmp(&b.0));

    dirs.into_iter()
        .filter_map(|(name, path)| {
            let capacity = match fs::read_to_string(path.join("capacity")) {
                Ok(capacity) => capacity,
                Err(e) => {
                    log::debug!("Skipping {}: {}", name, e);
                    return None;
                }
            };
            let status = fs::read_to_string(path.join("status")).ok();
            Some(SysfsBatteryEntry {
                name,
                capacity,
                status,
            })
        })
        .collect()
}
