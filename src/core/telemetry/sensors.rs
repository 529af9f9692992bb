use crate::error::Result;

use super::metrics::SensorReading;
use super::parsers::{clean_label, is_plausible_temperature};

/// Raw `(key, celsius)` pair from the host sensor facility.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTemperature {
    pub key: String,
    pub celsius: f64,
}

/// Trait for host temperature sensor facilities
pub trait SensorSource: Send + Sync {
    /// List every temperature sensor the host exposes.
    fn temperatures(&self) -> Result<Vec<RawTemperature>>;
}

/// Filters and labels readings from a [`SensorSource`].
pub struct SensorCollector {
    source: Box<dyn SensorSource>,
}

impl SensorCollector {
    pub fn new(source: Box<dyn SensorSource>) -> Self {
        Self { source }
    }

    /// Plausible readings only. Errors from the source are returned untouched.
    pub fn collect(&self) -> Result<Vec<SensorReading>> {
        let temps = self.source.temperatures()?;
        Ok(filter_readings(temps))
    }
}

/// Drop implausible values and tidy labels, keeping source order.
pub fn filter_readings(temps: Vec<RawTemperature>) -> Vec<SensorReading> {
    temps
        .into_iter()
        .filter(|t| is_plausible_temperature(t.celsius))
        .map(|t| SensorReading::celsius(clean_label(&t.key), t.celsius))
        .collect()
}
