use serde::{Deserialize, Serialize};

use crate::error::WttrError;

/// wttr.in `?format=j1` response, reduced to the fields the widget reads.
///
/// Every value arrives as a string, numbers included; parsing happens at
/// render time so a malformed field surfaces as a [`WttrError`] rather than
/// a deserialization failure of the whole document.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSnapshot {
    pub current_condition: Vec<CurrentCondition>,
    pub weather: Vec<DailyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "weatherCode")]
    pub weather_code: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<DescValue>,
    pub humidity: String,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DescValue {
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub hourly: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyForecast {
    pub time: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    #[serde(rename = "weatherCode")]
    pub weather_code: String,
    pub chanceoffog: String,
    pub chanceoffrost: String,
    pub chanceofovercast: String,
    pub chanceofrain: String,
    pub chanceofsnow: String,
    pub chanceofsunshine: String,
    pub chanceofthunder: String,
    pub chanceofwindy: String,
}

impl HourlyForecast {
    /// Chance percentages in the same fixed order as
    /// [`crate::glyphs::CHANCE_LABELS`].
    pub fn chance_values(&self) -> [&str; 8] {
        [
            &self.chanceoffog,
            &self.chanceoffrost,
            &self.chanceofovercast,
            &self.chanceofrain,
            &self.chanceofsnow,
            &self.chanceofsunshine,
            &self.chanceofthunder,
            &self.chanceofwindy,
        ]
    }
}

/// The single JSON line handed to waybar.
///
/// Serializes untagged so the two variants produce exactly the key sets the
/// bar expects: `text`/`class`/`tooltip` on success, `text`/`tooltip` on
/// failure. Field order is declaration order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OutputDocument {
    Report {
        text: String,
        class: String,
        tooltip: String,
    },
    Failure {
        text: String,
        tooltip: String,
    },
}

impl OutputDocument {
    /// Degraded document printed when any step of the refresh fails.
    pub fn failure(err: &WttrError) -> Self {
        OutputDocument::Failure {
            text: "❌".to_string(),
            tooltip: format!("wttr.in'e bağlanılamıyor\n{err}"),
        }
    }
}
