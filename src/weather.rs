use crate::config::Config;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Number, Value};
use std::time::Duration;
use thiserror::Error;

const FALLBACK_PROVIDER_MESSAGE: &str = "Error occurred";
const UNKNOWN_CITY: &str = "Unknown city";

/// A validated request for one city's current conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
}

impl WeatherQuery {
    /// Trims `city`; returns `None` when nothing is left.
    pub fn new(city: &str) -> Option<Self> {
        let city = city.trim();
        if city.is_empty() {
            None
        } else {
            Some(Self {
                city: city.to_string(),
            })
        }
    }
}

/// Current conditions extracted from a provider response.
///
/// Numbers keep the textual form the provider sent, so `18.5` renders as
/// `18.5` and `60` as `60`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResult {
    pub city_name: String,
    pub country_code: String,
    pub temperature_c: Option<Number>,
    pub feels_like_c: Option<Number>,
    pub humidity_pct: Option<Number>,
    pub wind_speed_ms: Option<Number>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The provider answered, but with a non-200 `cod`.
    #[error("{message}")]
    Provider { message: String },

    /// Timeout, DNS, refused connection, non-2xx status and the like.
    #[error("{0}")]
    Transport(String),

    /// The body was not valid JSON.
    #[error("{0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    // The request URL carries the API key in its query string.
    fn from(error: reqwest::Error) -> Self {
        FetchError::Transport(error.without_url().to_string())
    }
}

// Provider payload. Every field is optional and `cod` may arrive as a
// number or a string.
#[derive(Debug, Deserialize)]
struct OwResponse {
    cod: Option<Value>,
    message: Option<Value>,
    name: Option<String>,
    sys: Option<OwSys>,
    main: Option<OwMain>,
    wind: Option<OwWind>,
    weather: Option<Vec<OwCondition>>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<Number>,
    feels_like: Option<Number>,
    humidity: Option<Number>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<Number>,
}

#[derive(Debug, Deserialize)]
struct OwCondition {
    description: Option<String>,
}

impl OwResponse {
    fn is_ok(&self) -> bool {
        match &self.cod {
            Some(Value::Number(n)) => n.as_i64() == Some(200),
            Some(Value::String(s)) => s.trim() == "200",
            _ => false,
        }
    }

    fn provider_message(&self) -> Option<String> {
        match &self.message {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Null) | None => None,
            Some(Value::String(_)) => None,
            Some(other) => Some(other.to_string()),
        }
    }

    fn into_result(self) -> WeatherResult {
        let (temperature_c, feels_like_c, humidity_pct) = match self.main {
            Some(main) => (main.temp, main.feels_like, main.humidity),
            None => (None, None, None),
        };

        WeatherResult {
            city_name: self.name.unwrap_or_else(|| UNKNOWN_CITY.to_string()),
            country_code: self.sys.and_then(|s| s.country).unwrap_or_default(),
            temperature_c,
            feels_like_c,
            humidity_pct,
            wind_speed_ms: self.wind.and_then(|w| w.speed),
            description: self
                .weather
                .and_then(|list| list.into_iter().next())
                .and_then(|w| w.description)
                .unwrap_or_default(),
        }
    }
}

/// Decode the body of a successful (2xx) provider response.
pub fn parse_response(body: &str) -> Result<WeatherResult, FetchError> {
    let parsed: OwResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if parsed.is_ok() {
        return Ok(parsed.into_result());
    }

    Err(FetchError::Provider {
        message: parsed
            .provider_message()
            .unwrap_or_else(|| FALLBACK_PROVIDER_MESSAGE.to_string()),
    })
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_url: String,
    api_key: String,
    units: String,
    lang: String,
}

impl WeatherClient {
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        Self::with_timeout(config, config.timeout())
    }

    pub fn with_timeout(config: &Config, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key: config.api_key().unwrap_or_default().to_string(),
            units: config.units.clone(),
            lang: config.lang.clone(),
        })
    }

    /// One GET against the provider. No retries.
    pub async fn fetch_weather(&self, query: &WeatherQuery) -> Result<WeatherResult, FetchError> {
        tracing::info!(city = %query.city, "Fetching current weather");

        let result = self.request(query).await;
        match &result {
            Ok(weather) => tracing::info!(
                city = %weather.city_name,
                country = %weather.country_code,
                "Weather received"
            ),
            Err(e) => tracing::warn!(city = %query.city, error = %e, "Weather request failed"),
        }
        result
    }

    async fn request(&self, query: &WeatherQuery) -> Result<WeatherResult, FetchError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("q", query.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", self.units.as_str()),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await?;

        tracing::debug!(status = %response.status(), "Got response from weather provider");

        // Non-2xx is a transport failure, whatever the body says
        let body = response.error_for_status()?.text().await?;
        parse_response(&body)
    }
}
