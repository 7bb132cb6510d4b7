//! Integration tests for the OpenWeather provider using wiremock.

use std::time::Duration;

use irrigation_core::{
    AdvisoryError, WeatherProvider, WeatherRequest, provider::openweather::OpenWeatherProvider,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider(server: &MockServer, timeout: Duration) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".to_string(), &server.uri(), timeout).unwrap()
}

fn request(location: &str) -> WeatherRequest {
    WeatherRequest { location: location.to_string() }
}

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Rajkot"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": 200,
            "name": "Rajkot",
            "main": { "temp": 31.4, "humidity": 36 },
            "weather": [{ "main": "Rain", "description": "light rain" }],
            "rain": { "1h": 1.2 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reading = provider(&mock_server, Duration::from_secs(5))
        .current_weather(&request("Rajkot"))
        .await
        .unwrap();

    assert_eq!(reading.location_name, "Rajkot");
    assert_eq!(reading.temperature_c, 31.4);
    assert_eq!(reading.humidity_pct, 36);
    assert_eq!(reading.rainfall_mm, 1.2);
    assert_eq!(reading.condition, "Rain");
}

#[tokio::test]
async fn test_current_weather_without_rain_block() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cod": 200,
            "name": "Jaipur",
            "main": { "temp": 38.0, "humidity": 12 },
            "weather": [{ "main": "Clear" }]
        })))
        .mount(&mock_server)
        .await;

    let reading = provider(&mock_server, Duration::from_secs(5))
        .current_weather(&request("Jaipur"))
        .await
        .unwrap();

    assert_eq!(reading.rainfall_mm, 0.0);
}

#[tokio::test]
async fn test_city_not_found_is_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let err = provider(&mock_server, Duration::from_secs(5))
        .current_weather(&request("Nowhereville"))
        .await
        .unwrap_err();

    match err {
        AdvisoryError::Provider { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let err = provider(&mock_server, Duration::from_secs(5))
        .current_weather(&request("Delhi"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AdvisoryError::Provider { status: 401, ref message } if message == "Unauthorized"
    ));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "cod": 200,
                    "main": { "temp": 20.0, "humidity": 50 },
                    "weather": []
                }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let err = provider(&mock_server, Duration::from_millis(200))
        .current_weather(&request("Indore"))
        .await
        .unwrap_err();

    assert!(matches!(err, AdvisoryError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn test_refused_connection_is_connection_error() {
    // Nothing listens on the discard port locally.
    let provider =
        OpenWeatherProvider::new("TEST_KEY".into(), "http://127.0.0.1:9", Duration::from_secs(2))
            .unwrap();

    let err = provider.current_weather(&request("Bhopal")).await.unwrap_err();

    assert!(matches!(err, AdvisoryError::Connection(_)), "got {err:?}");
}
