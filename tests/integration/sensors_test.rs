use hwsnap::core::telemetry::{
    filter_readings, RawTemperature, SensorCollector, SensorSource, CELSIUS,
};
use hwsnap::platform::SysinfoSensorSource;
use hwsnap::Result;

fn raw(key: &str, celsius: f64) -> RawTemperature {
    RawTemperature {
        key: key.to_string(),
        celsius,
    }
}

#[test]
fn test_filter_boundaries() {
    let readings = filter_readings(vec![
        raw("a", 0.0),
        raw("b", -5.0),
        raw("c", 151.0),
        raw("d", 0.1),
        raw("e", 150.0),
        raw("f", -1.0),
    ]);

    let values: Vec<f64> = readings.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![0.1, 150.0]);
}

#[test]
fn test_labels_are_cleaned() {
    let readings = filter_readings(vec![
        raw("TC_AMBIENT", 30.0),
        raw(" nvme_Composite ", 41.0),
        raw("Tdie", 55.0),
    ]);

    let labels: Vec<&str> = readings.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["AMBIENT", "nvme Composite", "Tdie"]);
    assert!(readings.iter().all(|r| r.unit == CELSIUS));
}

#[test]
fn test_sysinfo_source_readings_are_plausible() {
    // Hosts without sensors simply report nothing.
    let collector = SensorCollector::new(Box::new(SysinfoSensorSource::new()));
    let readings = collector.collect().unwrap();
    assert!(readings.iter().all(|r| r.value > 0.0 && r.value <= 150.0));
}

#[test]
fn test_sysinfo_source_lists_raw_values() {
    let source = SysinfoSensorSource::new();
    let first: Result<Vec<RawTemperature>> = source.temperatures();
    assert!(first.is_ok());
}
