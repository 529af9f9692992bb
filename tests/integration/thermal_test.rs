use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use hwsnap::core::config::CollectorConfig;
use hwsnap::core::telemetry::{
    CpuTempSource, PowerDataCache, RawTemperature, SensorSource, Telemetry,
};
use hwsnap::platform::{CommandRunner, MacPowerPlatform};
use hwsnap::{HwsnapError, Result};
use parking_lot::Mutex;

struct NoSensors;

impl SensorSource for NoSensors {
    fn temperatures(&self) -> Result<Vec<RawTemperature>> {
        Ok(Vec::new())
    }
}

/// Replies per program name and remembers which programs ran.
#[derive(Default)]
struct ScriptedRunner {
    replies: HashMap<&'static str, Result<String>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    fn reply(mut self, program: &'static str, out: &str) -> Self {
        self.replies.insert(program, Ok(out.to_string()));
        self
    }

    fn fail(mut self, program: &'static str) -> Self {
        self.replies
            .insert(program, Err(HwsnapError::command_failed(program, "exit status: 1")));
        self
    }

    fn ran(&self, program: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == program).count()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, _args: &[&str], _timeout: Option<Duration>) -> Result<String> {
        self.calls.lock().push(program.to_string());
        match self.replies.get(program) {
            Some(Ok(out)) => Ok(out.clone()),
            Some(Err(e)) => Err(HwsnapError::command_failed(program, e.to_string())),
            None => Err(HwsnapError::command_failed(program, "not scripted")),
        }
    }
}

fn telemetry(runner: Arc<ScriptedRunner>) -> Telemetry {
    let platform = MacPowerPlatform::with_pmset(runner, &CollectorConfig::default(), true);
    Telemetry::with_parts(Arc::new(platform), PowerDataCache::default(), Box::new(NoSensors))
}

#[test]
fn test_battery_sensor_reading_is_used_directly() {
    let runner = Arc::new(
        ScriptedRunner::default()
            .reply("system_profiler", "Fan Speed: 1450 RPM")
            .reply("sh", "3125")
            .reply("sysctl", "30"),
    );

    let thermal = telemetry(runner.clone()).collect_thermal();
    assert_eq!(thermal.fan_speed, 1450);
    assert_eq!(thermal.cpu_temp, 31.25);
    assert_eq!(thermal.cpu_temp_source, CpuTempSource::BatterySensor);
    assert_eq!(runner.ran("sysctl"), 0);
}

#[test]
fn test_thermal_level_estimate_when_sensor_reads_zero() {
    let runner = Arc::new(
        ScriptedRunner::default()
            .fail("system_profiler")
            .reply("sh", "0")
            .reply("sysctl", "30"),
    );

    let thermal = telemetry(runner.clone()).collect_thermal();
    assert_eq!(thermal.fan_speed, 0);
    assert_eq!(thermal.cpu_temp, 45.0 + 30.0 * 0.5);
    assert!(thermal.is_estimate());
    assert_eq!(runner.ran("sysctl"), 1);
}

#[test]
fn test_thermal_level_estimate_when_sensor_fails() {
    let runner = Arc::new(ScriptedRunner::default().fail("sh").reply("sysctl", "8"));

    let thermal = telemetry(runner).collect_thermal();
    assert_eq!(thermal.cpu_temp, 49.0);
}

#[test]
fn test_all_probes_failing_gives_zero_status() {
    let runner = Arc::new(
        ScriptedRunner::default()
            .fail("system_profiler")
            .fail("sh")
            .fail("sysctl"),
    );

    let thermal = telemetry(runner).collect_thermal();
    assert!(thermal.is_empty());
    assert_eq!(thermal.cpu_temp_source, CpuTempSource::None);
}

#[test]
fn test_profile_report_shared_between_battery_and_thermal() {
    let runner = Arc::new(
        ScriptedRunner::default()
            .reply("pmset", " -InternalBattery-0 (id=1)\t70%; discharging; 5:00 remaining")
            .reply("system_profiler", "Cycle Count: 9\nCondition: Normal\nFan Speed: 900 RPM")
            .reply("sh", "2900"),
    );

    let telemetry = telemetry(runner.clone());
    let batts = telemetry.collect_batteries().unwrap();
    let thermal = telemetry.collect_thermal();

    assert_eq!(batts[0].cycle_count, 9);
    assert_eq!(thermal.fan_speed, 900);
    assert_eq!(runner.ran("system_profiler"), 1);
}
