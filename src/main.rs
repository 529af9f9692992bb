use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::PathBuf;

use hwsnap::commands;
use hwsnap::core::config::CollectorConfig;
use hwsnap::core::telemetry::Telemetry;

fn main() -> Result<()> {
    hwsnap::init_logging();

    let matches = Command::new("hwsnap")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Battery, thermal and sensor telemetry for this host")
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .help("Print JSON instead of formatted text")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Read collector settings from this JSON file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .subcommand(Command::new("battery").about("Show battery charge, status and health"))
        .subcommand(Command::new("thermal").about("Show fan speed and CPU temperature"))
        .subcommand(Command::new("sensors").about("Show temperature sensors"))
        .subcommand(Command::new("all").about("Show everything (default)"))
        .get_matches();

    let config = match matches.get_one::<PathBuf>("config") {
        Some(path) => CollectorConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CollectorConfig::load()?,
    };

    let telemetry = Telemetry::new(&config);
    commands::telemetry::execute(&telemetry, &matches)
}
