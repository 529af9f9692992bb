//! Pure text parsers for probe output.
//!
//! Nothing in here touches the filesystem or spawns processes, so every
//! function can be exercised against literal fixture strings.

use super::metrics::{BatteryStatus, UNKNOWN_STATUS};

/// Readings above this are treated as garbage rather than temperature.
pub const MAX_PLAUSIBLE_CELSIUS: f64 = 150.0;

/// Health and cycle count pulled out of the power profile report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PowerData {
    pub health: Option<String>,
    pub cycles: u32,
}

/// Parse `pmset -g batt` output into one [`BatteryStatus`] per percent-bearing line.
///
/// Time left, health and cycles are shared by every battery in `raw`.
pub fn parse_pmset(raw: &str, power: &PowerData) -> Vec<BatteryStatus> {
    let time_left = parse_time_remaining(raw);

    raw.lines()
        .filter(|line| line.contains('%'))
        .map(|line| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let mut percent = 0.0;
            let mut status = UNKNOWN_STATUS.to_string();

            if let Some(i) = fields.iter().position(|f| f.contains('%')) {
                let value = strip_separator(fields[i]);
                let value = value.strip_suffix('%').unwrap_or(value);
                percent = value.parse::<f64>().unwrap_or(0.0);
                if let Some(next) = fields.get(i + 1) {
                    status = strip_separator(next).to_string();
                }
            }

            BatteryStatus {
                percent,
                status,
                time_left: time_left.clone(),
                health: power.health.clone(),
                cycle_count: power.cycles,
            }
        })
        .collect()
}

/// Token immediately before the word "remaining", e.g. "1:30" in "1:30 remaining".
///
/// The last line mentioning "remaining" wins.
pub fn parse_time_remaining(raw: &str) -> Option<String> {
    let mut time_left = None;
    for line in raw.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        for (i, token) in tokens.iter().enumerate() {
            if *token == "remaining" && i > 0 {
                time_left = Some(tokens[i - 1].to_string());
            }
        }
    }
    time_left
}

/// Extract health and cycle count from `system_profiler SPPowerDataType` output.
pub fn parse_power_data(raw: &str) -> PowerData {
    let mut data = PowerData::default();

    for line in raw.lines() {
        let lower = line.to_lowercase();
        if lower.contains("cycle count") {
            if let Some(value) = single_colon_value(line) {
                data.cycles = value.parse().unwrap_or(0);
            }
        }
        if lower.contains("condition") {
            if let Some(value) = single_colon_value(line) {
                data.health = Some(value.to_string());
            }
        }
    }

    data
}

/// Fan speed in RPM from the power profile report.
///
/// Returns `None` when no fan line is present; a fan line with a non-numeric
/// value yields `Some(0)`.
pub fn parse_fan_speed(raw: &str) -> Option<u32> {
    raw.lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            lower.contains("fan") && lower.contains("speed")
        })
        .find_map(single_colon_value)
        .map(|value| {
            value
                .split_whitespace()
                .next()
                .and_then(|n| n.parse().ok())
                .unwrap_or(0)
        })
}

/// Battery sensor value as reported by ioreg, in hundredths of a degree.
pub fn parse_battery_temperature(raw: &str) -> Option<f64> {
    match raw.trim().parse::<i64>() {
        Ok(centi) if centi > 0 => Some(centi as f64 / 100.0),
        _ => None,
    }
}

/// Kernel thermal level. Negative or non-numeric output is rejected.
pub fn parse_thermal_level(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|level| *level >= 0)
}

/// Rough Celsius estimate for a thermal level.
///
/// Uncalibrated heuristic: level 0 maps to 45 °C and each step adds half a degree.
pub fn estimate_cpu_temp(level: i64) -> f64 {
    45.0 + level as f64 * 0.5
}

/// Build a battery from the contents of a sysfs `capacity` and `status` pair.
pub fn parse_sysfs_battery(capacity: &str, status: Option<&str>) -> BatteryStatus {
    let status = status.map(str::trim).unwrap_or_default();
    BatteryStatus {
        percent: capacity.trim().parse().unwrap_or(0.0),
        status: if status.is_empty() {
            UNKNOWN_STATUS.to_string()
        } else {
            status.to_string()
        },
        ..Default::default()
    }
}

/// Whether a sensor value looks like a real temperature: (0, 150].
pub fn is_plausible_temperature(value: f64) -> bool {
    value.is_finite() && value > 0.0 && value <= MAX_PLAUSIBLE_CELSIUS
}

/// Tidy a sensor key for display: drop the "TC" key prefix and underscores.
///
/// Applying it twice gives the same result as applying it once.
pub fn clean_label(key: &str) -> String {
    let mut label = key.replace('_', " ").trim().to_string();
    while let Some(rest) = label.strip_prefix("TC") {
        label = rest.trim_start().to_string();
    }
    label
}

fn strip_separator(field: &str) -> &str {
    field.strip_suffix(';').unwrap_or(field)
}

// Lines like "a: b: c" are ambiguous and skipped.
fn single_colon_value(line: &str) -> Option<&str> {
    let mut parts = line.split(':');
    let _key = parts.next()?;
    let value = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some(value.trim())
}
