//! Snapshot → OutputDocument rendering.
//!
//! The tooltip uses Pango markup, which waybar renders natively. All the
//! quirky string handling here (the `"00"` strip in [`hour_label`], the
//! width-3 padding of hourly temperatures) reproduces the widget's
//! long-standing output byte for byte.

use crate::error::WttrError;
use crate::glyphs::{self, CHANCE_LABELS};
use crate::model::{HourlyForecast, OutputDocument, WeatherSnapshot};

/// Tooltip color for a feels-like temperature, five fixed Celsius bands.
/// Lower bound inclusive, upper bound exclusive, tails open-ended.
fn temp_color(temp: i32) -> &'static str {
    if temp < 0 {
        "#89dceb"
    } else if temp < 10 {
        "#74c7ec"
    } else if temp < 20 {
        "#89b4fa"
    } else if temp < 30 {
        "#f9e2af"
    } else {
        "#f38ba8"
    }
}

/// Two-digit hour label from a j1 `time` field ("0", "300", .., "2100").
///
/// Strips the literal substring "00" and left-pads the rest to width 2.
/// This is a heuristic, not a time parser; it is kept exactly as-is because
/// the upstream values ("0".."2100" in steps of 300) happen to make it work.
fn hour_label(time: &str) -> String {
    format!("{:0>2}", time.replace("00", ""))
}

/// Hourly feels-like with a trailing degree sign, left-justified to width 3.
fn format_temp(feels_like_c: &str) -> String {
    let degrees = format!("{feels_like_c}°");
    format!("{degrees:<3}")
}

fn parse_i32(field: &'static str, value: &str) -> Result<i32, WttrError> {
    value.parse().map_err(|_| WttrError::BadNumber { field, value: value.to_string() })
}

fn glyph_for(code: &str) -> Result<&'static str, WttrError> {
    glyphs::glyph_for(code).ok_or_else(|| WttrError::UnknownCode(code.to_string()))
}

/// Comma-joined "label pct%" pairs for every chance field above zero, in
/// fixed table order. Empty string when nothing is above zero.
fn format_chances(hour: &HourlyForecast) -> Result<String, WttrError> {
    let mut conditions = Vec::new();
    for (label, value) in CHANCE_LABELS.iter().zip(hour.chance_values()) {
        if parse_i32("chanceof", value)? > 0 {
            conditions.push(format!("{label} {value}%"));
        }
    }
    Ok(conditions.join(", "))
}

/// Build the success document from a snapshot and the current local hour.
///
/// Any missing field, unparseable number, or unknown weather code comes back
/// as `Err`; the caller turns that into the failure document.
pub fn render(snapshot: &WeatherSnapshot, current_hour: u32) -> Result<OutputDocument, WttrError> {
    let current = snapshot
        .current_condition
        .first()
        .ok_or(WttrError::Missing("current_condition"))?;

    let temp = parse_i32("FeelsLikeC", &current.feels_like_c)?;
    let glyph = glyph_for(&current.weather_code)?;
    let desc = current
        .weather_desc
        .first()
        .map(|d| d.value.as_str())
        .ok_or(WttrError::Missing("weatherDesc"))?;

    let text = format!("{glyph} {temp}°C");
    let class = desc.to_string();

    let mut tooltip = format!("<span size='14000'>{desc}</span>\n");
    tooltip.push_str(&format!(
        "🌡️ Sıcaklık: <span foreground='{}'>{temp}°C</span>\n",
        temp_color(temp)
    ));
    tooltip.push_str(&format!("💧 Nem: {}%\n", current.humidity));
    tooltip.push_str(&format!("🌪️ Rüzgar: {}km/s\n", current.windspeed_kmph));
    tooltip.push_str("\nSaatlik Tahmin:\n");

    let today = snapshot.weather.first().ok_or(WttrError::Missing("weather"))?;
    for hour in &today.hourly {
        let label = hour_label(&hour.time);
        if parse_i32("time", &label)? <= current_hour as i32 {
            continue;
        }

        tooltip.push_str(&format!(
            "\n{label}:00 {} {} ",
            glyph_for(&hour.weather_code)?,
            format_temp(&hour.feels_like_c),
        ));

        let chances = format_chances(hour)?;
        if !chances.is_empty() {
            tooltip.push_str(&format!("\n  {chances}"));
        }
    }

    Ok(OutputDocument::Report { text, class, tooltip })
}
