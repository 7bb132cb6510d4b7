//! Core library for the `irrigation` CLI.
//!
//! This crate defines:
//! - The crop requirement table and the irrigation scoring rules
//! - The session log and its CSV export
//! - Abstraction over weather providers (OpenWeather)
//! - Configuration, credentials and display-language labels
//!
//! It is used by `irrigation-cli`, but can also be reused by other binaries or services.

pub mod advice;
pub mod advisor;
pub mod config;
pub mod crop;
pub mod error;
pub mod labels;
pub mod model;
pub mod provider;
pub mod session;

pub use advice::{AdviceResult, Factors, Priority, compute_advice, evaluate_factors};
pub use advisor::Advisor;
pub use config::{Config, ProviderConfig};
pub use crop::{Crop, CropProfile, crop_profile};
pub use error::AdvisoryError;
pub use labels::{Label, Language, resolve_label};
pub use model::{AdviceInput, LogEntry, WeatherReading, WeatherRequest};
pub use provider::{WeatherProvider, provider_from_config};
pub use session::{SessionLog, SessionStats, export_file_name};
