use std::fs;
use std::time::Duration;

use hwsnap::core::config::CollectorConfig;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = CollectorConfig::default();
    assert_eq!(config.power_cache_ttl(), Duration::from_secs(30));
    assert_eq!(config.fast_probe_timeout(), Duration::from_millis(500));
    assert_eq!(config.slow_probe_timeout(), Duration::from_secs(3));
    assert_eq!(config.power_supply_root.to_str(), Some("/sys/class/power_supply"));
}

#[test]
fn test_config_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = CollectorConfig::load_from(&temp_dir.path().join("config.json")).unwrap();
    assert_eq!(config, CollectorConfig::default());
}

#[test]
fn test_config_partial_file_keeps_other_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "power_cache_ttl_secs": 5, "power_supply_root": "/tmp/ps" }"#).unwrap();

    let config = CollectorConfig::load_from(&path).unwrap();
    assert_eq!(config.power_cache_ttl_secs, 5);
    assert_eq!(config.power_supply_root.to_str(), Some("/tmp/ps"));
    assert_eq!(config.fast_probe_timeout_ms, 500);
    assert_eq!(config.slow_probe_timeout_ms, 3000);
}

#[test]
fn test_config_empty_or_corrupt_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    fs::write(&path, "  \n").unwrap();
    assert_eq!(CollectorConfig::load_from(&path).unwrap(), CollectorConfig::default());

    fs::write(&path, "{ not json").unwrap();
    assert_eq!(CollectorConfig::load_from(&path).unwrap(), CollectorConfig::default());
}
