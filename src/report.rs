use crate::weather::WeatherResult;
use chrono::{DateTime, Local};
use serde_json::Number;

/// Shown in place of a value the provider did not send.
pub const MISSING: &str = "--";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailCell {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Display strings for one successful fetch. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub temperature: String,
    pub location: String,
    pub description: String,
    pub details: [DetailCell; 3],
    pub received_at: DateTime<Local>,
}

impl WeatherReport {
    pub fn new(result: &WeatherResult, received_at: DateTime<Local>) -> Self {
        let location = if result.country_code.is_empty() {
            result.city_name.clone()
        } else {
            format!("{}, {}", result.city_name, result.country_code)
        };

        Self {
            temperature: format!("{}°C", value_or_missing(&result.temperature_c)),
            location,
            description: capitalize(&result.description),
            details: [
                DetailCell {
                    icon: "🌡",
                    label: "Feels Like",
                    value: format!("{}°C", value_or_missing(&result.feels_like_c)),
                },
                DetailCell {
                    icon: "💧",
                    label: "Humidity",
                    value: format!("{}%", value_or_missing(&result.humidity_pct)),
                },
                DetailCell {
                    icon: "💨",
                    label: "Wind",
                    value: format!("{} m/s", value_or_missing(&result.wind_speed_ms)),
                },
            ],
            received_at,
        }
    }

    pub fn updated_label(&self) -> String {
        format!("Updated: {}", self.received_at.format("%I:%M:%S %p"))
    }
}

impl From<&WeatherResult> for WeatherReport {
    fn from(result: &WeatherResult) -> Self {
        Self::new(result, Local::now())
    }
}

fn value_or_missing(value: &Option<Number>) -> String {
    value
        .as_ref()
        .map(Number::to_string)
        .unwrap_or_else(|| MISSING.to_string())
}

/// Upper-case the first character, lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
