use crate::core::telemetry::{
    BatteryStatus, ChargeState, CpuTempSource, SensorReading, TelemetrySnapshot, ThermalStatus,
};
use colored::*;
use std::fmt::Write;

/// Filter for controlling which telemetry sections to display
#[derive(Debug, Clone)]
pub struct DisplayFilter {
    pub battery: bool,
    pub thermal: bool,
    pub sensors: bool,
}

impl DisplayFilter {
    /// Returns a filter that shows all sections
    pub fn all() -> Self {
        Self {
            battery: true,
            thermal: true,
            sensors: true,
        }
    }
}

pub fn print_snapshot(snapshot: &TelemetrySnapshot, filter: &DisplayFilter) {
    print!("{}", render_snapshot(snapshot, filter));
}

pub fn render_snapshot(snapshot: &TelemetrySnapshot, filter: &DisplayFilter) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "HARDWARE TELEMETRY".bold().bright_cyan());
    let _ = writeln!(out, "{}", "=".repeat(60));
    let _ = writeln!(
        out,
        "  {} {}   {} {}",
        "Platform:".bold(),
        snapshot.platform,
        "Collected:".bold(),
        snapshot.collected_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    if filter.battery {
        match &snapshot.battery_error {
            Some(err) => {
                out.push_str(&section_header("Battery"));
                let _ = writeln!(out, "  {}", err.dimmed());
            }
            None => out.push_str(&render_batteries(&snapshot.batteries)),
        }
    }

    if filter.thermal {
        out.push_str(&render_thermal(&snapshot.thermal));
    }

    if filter.sensors {
        match &snapshot.sensor_error {
            Some(err) => {
                out.push_str(&section_header("Sensors"));
                let _ = writeln!(out, "  {}", err.red());
            }
            None => out.push_str(&render_sensors(&snapshot.sensors)),
        }
    }

    out
}

fn section_header(title: &str) -> String {
    format!("\n{}\n{}\n", title.bold().cyan(), "-".repeat(60))
}

pub fn render_batteries(batts: &[BatteryStatus]) -> String {
    let mut out = section_header("Battery");

    for (i, batt) in batts.iter().enumerate() {
        if batts.len() > 1 {
            let _ = writeln!(out, "  {} {}", "Battery".bold(), i);
        }

        let status = match batt.charge_state() {
            ChargeState::Charging => batt.status.green(),
            ChargeState::Discharging => batt.status.yellow(),
            ChargeState::Full => batt.status.green(),
            ChargeState::NotCharging => batt.status.cyan(),
            ChargeState::Unknown => batt.status.normal(),
        };
        let _ = writeln!(
            out,
            "    Charge: {} {:.0}%   Status: {}",
            create_charge_bar(batt.percent, 20),
            batt.percent,
            status
        );

        if let Some(ref time_left) = batt.time_left {
            let _ = writeln!(out, "    Time Remaining: {}", time_left);
        }

        if let Some(ref health) = batt.health {
            let health_str = if health.eq_ignore_ascii_case("normal") {
                health.green()
            } else {
                health.yellow()
            };
            let _ = writeln!(out, "    Condition: {}", health_str);
        }

        if batt.cycle_count > 0 {
            let cycles = batt.cycle_count;
            let cycles_str = if cycles < 300 {
                format!("{}", cycles).green()
            } else if cycles < 800 {
                format!("{}", cycles).yellow()
            } else {
                format!("{}", cycles).red()
            };
            let _ = writeln!(out, "    Cycle Count: {}", cycles_str);
        }
    }

    out
}

pub fn render_thermal(thermal: &ThermalStatus) -> String {
    let mut out = section_header("Thermal");

    if thermal.is_empty() {
        let _ = writeln!(out, "  {}", "No thermal data available".dimmed());
        return out;
    }

    if thermal.fan_speed > 0 {
        let _ = writeln!(out, "    Fan Speed: {} RPM", thermal.fan_speed);
    }

    match thermal.cpu_temp_source {
        CpuTempSource::None => {}
        CpuTempSource::BatterySensor => {
            let _ = writeln!(out, "    CPU Temp: {}", colored_temp(thermal.cpu_temp));
        }
        CpuTempSource::ThermalLevelEstimate => {
            let _ = writeln!(
                out,
                "    CPU Temp: ~{} {}",
                colored_temp(thermal.cpu_temp),
                "(estimated from thermal level)".dimmed()
            );
        }
    }

    out
}

pub fn render_sensors(readings: &[SensorReading]) -> String {
    let mut out = section_header("Sensors");

    if readings.is_empty() {
        let _ = writeln!(out, "  {}", "No temperature sensors found".dimmed());
        return out;
    }

    let width = readings
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0);
    for reading in readings {
        let _ = writeln!(
            out,
            "    {:<width$}  {}",
            reading.label,
            colored_temp(reading.value),
            width = width
        );
    }

    out
}

fn colored_temp(celsius: f64) -> ColoredString {
    let text = format!("{:.1}°C", celsius);
    if celsius >= 90.0 {
        text.red()
    } else if celsius >= 70.0 {
        text.yellow()
    } else {
        text.green()
    }
}

/// Create a charge bar with ASCII characters
fn create_charge_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    let bar = format!("{}{}", "#".repeat(filled), ".".repeat(empty));

    // Low charge is the alarming end
    let colored_bar = if percent <= 20.0 {
        bar.red()
    } else if percent <= 50.0 {
        bar.yellow()
    } else {
        bar.green()
    };

    format!("[{}]", colored_bar)
}
