use crate::{
    Config, WeatherReading, WeatherRequest, error::AdvisoryError,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions at the requested location.
    ///
    /// Implementations must give up after a bounded wait and report
    /// [`AdvisoryError::Timeout`] rather than retrying.
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, AdvisoryError>;
}

/// Construct the weather provider described by the configuration.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No OpenWeather API key configured.\n\
                 Hint: set OPENWEATHER_API_KEY or run `irrigation configure` and enter your API key."
        )
    })?;

    let provider = OpenWeatherProvider::new(api_key, config.base_url(), config.timeout())?;

    Ok(Box::new(provider))
}
