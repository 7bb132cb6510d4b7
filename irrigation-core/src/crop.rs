use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Static irrigation thresholds for a single crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropProfile {
    /// Soil moisture (%) below which the crop is considered dry.
    pub min_moisture_pct: f64,
    /// Air temperature (°C) above which evaporation demand is high.
    pub temp_threshold_c: f64,
    /// Rainfall (mm/hr) below which rain is not enough to cover demand.
    pub rain_threshold_mm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Crop {
    #[default]
    Wheat,
    Rice,
    Cotton,
    Sugarcane,
    Maize,
    Barley,
    Soybean,
}

impl Crop {
    pub const fn all() -> &'static [Crop] {
        &[
            Crop::Wheat,
            Crop::Rice,
            Crop::Cotton,
            Crop::Sugarcane,
            Crop::Maize,
            Crop::Barley,
            Crop::Soybean,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Wheat => "Wheat",
            Crop::Rice => "Rice",
            Crop::Cotton => "Cotton",
            Crop::Sugarcane => "Sugarcane",
            Crop::Maize => "Maize",
            Crop::Barley => "Barley",
            Crop::Soybean => "Soybean",
        }
    }

    /// Requirement row for this crop.
    pub const fn profile(&self) -> CropProfile {
        let (min_moisture_pct, temp_threshold_c, rain_threshold_mm) = match self {
            Crop::Wheat => (30.0, 25.0, 3.0),
            Crop::Rice => (70.0, 30.0, 8.0),
            Crop::Cotton => (35.0, 28.0, 5.0),
            Crop::Sugarcane => (60.0, 32.0, 10.0),
            Crop::Maize => (40.0, 26.0, 4.0),
            Crop::Barley => (25.0, 24.0, 3.0),
            Crop::Soybean => (45.0, 27.0, 6.0),
        };

        CropProfile { min_moisture_pct, temp_threshold_c, rain_threshold_mm }
    }

    /// Resolve a crop by name, falling back to Wheat for unknown identifiers.
    pub fn lookup(name: &str) -> Crop {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(crop = name, "Unknown crop, falling back to Wheat profile");
            Crop::Wheat
        })
    }
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Crop {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();

        Crop::all()
            .iter()
            .copied()
            .find(|crop| crop.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown crop '{value}'. Supported crops: Wheat, Rice, Cotton, Sugarcane, Maize, Barley, Soybean."
                )
            })
    }
}

/// Profile for a crop name; unknown names get the Wheat profile.
pub fn crop_profile(name: &str) -> CropProfile {
    Crop::lookup(name).profile()
}
