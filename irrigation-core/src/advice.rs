//! Irrigation scoring.
//!
//! Four independent boolean factors are summed into a score in `0..=4`,
//! which maps directly onto a priority tier and a water-saving score.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crop::CropProfile;

/// Humidity (%) below which air is considered dry, regardless of crop.
pub const LOW_HUMIDITY_PCT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    NotNeeded,
    Medium,
    High,
}

impl Priority {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => Priority::NotNeeded,
            2 => Priority::Medium,
            _ => Priority::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::NotNeeded => "Not Needed",
            Priority::Medium => "Medium Priority",
            Priority::High => "High Priority",
        }
    }

    /// Display metric for the tier; not computed independently.
    pub fn water_score(&self) -> u8 {
        match self {
            Priority::NotNeeded => 95,
            Priority::Medium => 85,
            Priority::High => 75,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which conditions argue for irrigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Factors {
    pub low_moisture: bool,
    pub high_temperature: bool,
    pub low_rainfall: bool,
    pub low_humidity: bool,
}

impl Factors {
    pub fn score(&self) -> u8 {
        [self.low_moisture, self.high_temperature, self.low_rainfall, self.low_humidity]
            .into_iter()
            .filter(|f| *f)
            .count() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdviceResult {
    pub irrigate: bool,
    pub priority: Priority,
    pub water_score: u8,
}

impl From<Priority> for AdviceResult {
    fn from(priority: Priority) -> Self {
        Self {
            irrigate: priority != Priority::NotNeeded,
            priority,
            water_score: priority.water_score(),
        }
    }
}

pub fn evaluate_factors(
    crop: &CropProfile,
    soil_moisture_pct: f64,
    temperature_c: f64,
    humidity_pct: f64,
    rainfall_mm: f64,
) -> Factors {
    Factors {
        low_moisture: soil_moisture_pct < crop.min_moisture_pct,
        high_temperature: temperature_c > crop.temp_threshold_c,
        low_rainfall: rainfall_mm < crop.rain_threshold_mm,
        low_humidity: humidity_pct < LOW_HUMIDITY_PCT,
    }
}

/// Compute the irrigation recommendation for a crop under the given conditions.
pub fn compute_advice(
    crop: &CropProfile,
    soil_moisture_pct: f64,
    temperature_c: f64,
    humidity_pct: f64,
    rainfall_mm: f64,
) -> AdviceResult {
    let factors =
        evaluate_factors(crop, soil_moisture_pct, temperature_c, humidity_pct, rainfall_mm);

    Priority::from_score(factors.score()).into()
}
