use chrono::Local;

use crate::{
    advice::compute_advice,
    error::AdvisoryError,
    model::{AdviceInput, LogEntry, WeatherRequest},
    provider::WeatherProvider,
    session::SessionLog,
};

/// Runs one advice request end to end: validate, fetch, score, record.
#[derive(Debug)]
pub struct Advisor {
    provider: Box<dyn WeatherProvider>,
}

impl Advisor {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Compute advice for `input` and append it to `log`.
    ///
    /// The log is only touched once everything else has succeeded.
    pub async fn advise<'a>(
        &self,
        log: &'a mut SessionLog,
        input: AdviceInput,
    ) -> Result<&'a LogEntry, AdvisoryError> {
        let location = input.location.trim();
        if location.is_empty() {
            return Err(AdvisoryError::InvalidInput("Please enter a valid location.".to_string()));
        }
        if input.soil_moisture_pct > 100 {
            return Err(AdvisoryError::InvalidInput(format!(
                "Soil moisture must be between 0 and 100, got {}.",
                input.soil_moisture_pct
            )));
        }

        let request = WeatherRequest { location: location.to_string() };
        let weather = self.provider.current_weather(&request).await.inspect_err(|err| {
            tracing::warn!(location, error = %err, "Weather fetch failed");
        })?;

        let profile = input.crop.profile();
        let advice = compute_advice(
            &profile,
            f64::from(input.soil_moisture_pct),
            weather.temperature_c,
            f64::from(weather.humidity_pct),
            weather.rainfall_mm,
        );

        tracing::info!(
            location,
            crop = %input.crop,
            priority = %advice.priority,
            "Irrigation advice computed"
        );

        Ok(log.append(LogEntry {
            timestamp: Local::now(),
            location: request.location,
            crop: input.crop,
            soil_moisture_pct: input.soil_moisture_pct,
            weather,
            advice,
        }))
    }
}
