//! Weather backend client

use serde::Deserialize;

use crate::action::Action;
use crate::state::WeatherReport;

/// Hosted backend used when no `--api-url` is given
pub const DEFAULT_BASE_URL: &str = "https://weather-app-backend-2-gyrr.onrender.com";

/// Response body of `GET /weather/{city}`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentConditions {
    location_name: String,
    temperature: f64,
    humidity: f64,
    wind_speed: f64,
    cloud_cover: f64,
    weather_descriptions: Vec<String>,
}

impl From<CurrentConditions> for WeatherReport {
    fn from(data: CurrentConditions) -> Self {
        Self {
            location_name: data.location_name,
            temperature: data.temperature,
            humidity: data.humidity,
            wind_speed: data.wind_speed,
            cloud_cover: data.cloud_cover,
            description: data
                .weather_descriptions
                .into_iter()
                .next()
                .unwrap_or_default(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("weather request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("weather data not found for {city:?} (status {status})")]
    NotFound {
        city: String,
        status: reqwest::StatusCode,
    },
    #[error("weather response could not be read: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Thin client over the weather backend
#[derive(Clone, Debug)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for WeatherClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/weather/{city}` with the city percent-encoded
    pub fn weather_url(&self, city: &str) -> String {
        format!(
            "{}/weather/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(city)
        )
    }

    /// Fetch current conditions for a city.
    ///
    /// One GET, no timeout and no retry. Any non-2xx status is reported as
    /// [`ApiError::NotFound`]; a body missing a required field is a
    /// [`ApiError::Decode`].
    pub async fn fetch_current(&self, city: &str) -> Result<WeatherReport, ApiError> {
        let url = self.weather_url(city);
        tracing::debug!(%url, "requesting current weather");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ApiError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::NotFound {
                city: city.to_string(),
                status,
            });
        }

        let data: CurrentConditions = response.json().await.map_err(ApiError::Decode)?;
        Ok(data.into())
    }
}

/// Run one fetch and turn its outcome into the result action.
///
/// Failures are logged and reported as `WeatherDidError`; they never
/// escape the task.
pub async fn fetch_action(client: &WeatherClient, city: String) -> Action {
    match client.fetch_current(&city).await {
        Ok(report) => {
            tracing::info!(
                city = %city,
                location = %report.location_name,
                "weather data loaded"
            );
            Action::WeatherDidLoad(report)
        }
        Err(e) => {
            tracing::warn!(city = %city, error = %e, "failed to fetch weather data");
            Action::WeatherDidError(e.to_string())
        }
    }
}
