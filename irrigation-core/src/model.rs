use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{advice::AdviceResult, crop::Crop};

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub location: String,
}

/// Current conditions as reported by a weather provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    /// Rain over the last hour; zero when the provider omits it.
    pub rainfall_mm: f64,
    pub condition: String,
}

/// What the user asked for in one advice request.
#[derive(Debug, Clone)]
pub struct AdviceInput {
    pub location: String,
    pub crop: Crop,
    pub soil_moisture_pct: u8,
}

/// A single successful advice computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub location: String,
    pub crop: Crop,
    pub soil_moisture_pct: u8,
    pub weather: WeatherReading,
    pub advice: AdviceResult,
}
