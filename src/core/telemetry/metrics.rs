use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unit symbol attached to every sensor reading.
pub const CELSIUS: &str = "°C";

/// Status used when a battery does not report one.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// One battery as seen at collection time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatteryStatus {
    /// Charge level, 0-100.
    pub percent: f64,
    /// Free-text charging state as reported by the source (e.g. "charging", "Discharging").
    pub status: String,
    /// Remaining time estimate such as "1:30".
    pub time_left: Option<String>,
    /// Condition descriptor such as "Normal".
    pub health: Option<String>,
    /// Charge cycles, 0 when unknown.
    pub cycle_count: u32,
}

/// Coarse classification of [`BatteryStatus::status`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ChargeState {
    Charging,
    Discharging,
    Full,
    NotCharging,
    #[default]
    Unknown,
}

impl std::fmt::Display for ChargeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChargeState::Charging => "Charging",
            ChargeState::Discharging => "Discharging",
            ChargeState::Full => "Full",
            ChargeState::NotCharging => "Not charging",
            ChargeState::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

impl BatteryStatus {
    /// Map the free-text status onto [`ChargeState`].
    ///
    /// pmset reports lower-case words ("charging", "charged", "AC attached"),
    /// sysfs reports capitalised ones ("Charging", "Not charging").
    pub fn charge_state(&self) -> ChargeState {
        match self.status.trim().to_lowercase().as_str() {
            "charging" => ChargeState::Charging,
            "discharging" => ChargeState::Discharging,
            "charged" | "full" | "finishing charge" | "finishing" => ChargeState::Full,
            "not charging" | "ac attached" | "ac" => ChargeState::NotCharging,
            _ => ChargeState::Unknown,
        }
    }
}

/// Where [`ThermalStatus::cpu_temp`] came from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum CpuTempSource {
    #[default]
    None,
    /// Battery-adjacent sensor read through the device tree.
    BatterySensor,
    /// Linear estimate derived from the kernel thermal level. Not a measurement.
    ThermalLevelEstimate,
}

/// Fan and CPU temperature. The zero value means "no data".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThermalStatus {
    /// Fan speed in RPM, 0 when unknown.
    pub fan_speed: u32,
    /// CPU temperature in Celsius, 0 when unknown.
    pub cpu_temp: f64,
    #[serde(default)]
    pub cpu_temp_source: CpuTempSource,
}

impl ThermalStatus {
    pub fn is_estimate(&self) -> bool {
        self.cpu_temp_source == CpuTempSource::ThermalLevelEstimate
    }

    pub fn is_empty(&self) -> bool {
        self.fan_speed == 0 && self.cpu_temp == 0.0
    }
}

/// A generic temperature sensor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub label: String,
    pub value: f64,
    pub unit: String,
}

impl SensorReading {
    pub fn celsius<S: Into<String>>(label: S, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            unit: CELSIUS.to_string(),
        }
    }
}

/// Everything the collectors produced in one poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub collected_at: DateTime<Utc>,
    pub platform: String,
    pub batteries: Vec<BatteryStatus>,
    pub battery_error: Option<String>,
    pub thermal: ThermalStatus,
    pub sensors: Vec<SensorReading>,
    pub sensor_error: Option<String>,
}
