use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use crate::{
    error::AdvisoryError,
    model::{WeatherReading, WeatherRequest},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { api_key, base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    async fn fetch_current(&self, location: &str) -> Result<WeatherReading, AdvisoryError> {
        let url = format!("{}{}", self.base_url, CURRENT_PATH);

        tracing::debug!(location, "Requesting current weather from OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", location), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(AdvisoryError::from_transport)?;

        let status = res.status();
        let body = res.text().await.map_err(AdvisoryError::from_transport)?;

        if !status.is_success() {
            return Err(AdvisoryError::Provider {
                status: status.as_u16(),
                message: provider_message(&body).unwrap_or_else(|| truncate_body(&body)),
            });
        }

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwRain {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    #[serde(default)]
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    rain: Option<OwRain>,
}

/// Status code carried inside the payload. OpenWeather sends it as either
/// a number or a string depending on the endpoint and outcome.
fn payload_code(payload: &Value) -> Option<u16> {
    match payload.get("cod")? {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn provider_message(body: &str) -> Option<String> {
    let payload: Value = serde_json::from_str(body).ok()?;
    payload.get("message")?.as_str().map(str::to_string)
}

fn parse_current(body: &str) -> Result<WeatherReading, AdvisoryError> {
    let payload: Value = serde_json::from_str(body).map_err(|e| {
        AdvisoryError::Unexpected(format!("Failed to parse OpenWeather current JSON: {e}"))
    })?;

    if let Some(code) = payload_code(&payload).filter(|code| *code != 200) {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string();
        return Err(AdvisoryError::Provider { status: code, message });
    }

    let parsed: OwCurrentResponse = serde_json::from_value(payload).map_err(|e| {
        AdvisoryError::Unexpected(format!("Unexpected OpenWeather current payload: {e}"))
    })?;

    let condition = parsed
        .weather
        .first()
        .map(|w| w.main.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    let rainfall_mm = parsed.rain.and_then(|r| r.one_hour).unwrap_or(0.0);

    Ok(WeatherReading {
        location_name: parsed.name,
        temperature_c: parsed.main.temp,
        humidity_pct: parsed.main.humidity,
        rainfall_mm,
        condition,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherReading, AdvisoryError> {
        self.fetch_current(&request.location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
