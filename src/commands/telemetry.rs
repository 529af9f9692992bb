use crate::core::telemetry::{Telemetry, TelemetrySnapshot};
use crate::ui::telemetry_formatters::{self, DisplayFilter};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

pub fn execute(telemetry: &Telemetry, matches: &ArgMatches) -> Result<()> {
    let (name, sub_matches) = matches.subcommand().unwrap_or(("all", matches));
    let json = matches.get_flag("json") || sub_matches.get_flag("json");

    match name {
        "battery" => execute_battery(telemetry, json),
        "thermal" => execute_thermal(telemetry, json),
        "sensors" => execute_sensors(telemetry, json),
        _ => execute_all(telemetry, json),
    }
}

fn execute_battery(telemetry: &Telemetry, json: bool) -> Result<()> {
    match telemetry.collect_batteries() {
        Ok(batts) if json => print_json(&batts),
        Ok(batts) => {
            print!("{}", telemetry_formatters::render_batteries(&batts));
            Ok(())
        }
        Err(e) if e.is_no_data() => {
            println!("{}", e.to_string().dimmed());
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.to_string().yellow());
            Ok(())
        }
    }
}

fn execute_thermal(telemetry: &Telemetry, json: bool) -> Result<()> {
    let thermal = telemetry.collect_thermal();
    if json {
        return print_json(&thermal);
    }
    print!("{}", telemetry_formatters::render_thermal(&thermal));
    Ok(())
}

fn execute_sensors(telemetry: &Telemetry, json: bool) -> Result<()> {
    match telemetry.collect_sensors() {
        Ok(readings) if json => print_json(&readings),
        Ok(readings) => {
            print!("{}", telemetry_formatters::render_sensors(&readings));
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            Ok(())
        }
    }
}

fn execute_all(telemetry: &Telemetry, json: bool) -> Result<()> {
    let snapshot: TelemetrySnapshot = telemetry.snapshot();
    if json {
        return print_json(&snapshot);
    }
    telemetry_formatters::print_snapshot(&snapshot, &DisplayFilter::all());
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize telemetry")?;
    println!("{}", text);
    Ok(())
}
