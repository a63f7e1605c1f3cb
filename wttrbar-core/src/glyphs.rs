//! Fixed lookup tables for the widget.
//!
//! `CODE_GLYPHS` covers every weather code wttr.in emits for current and
//! hourly conditions. A code outside this table is treated as an error by
//! the caller, never rendered as an empty glyph.

/// wttr.in weather code → emoji.
pub const CODE_GLYPHS: &[(&str, &str)] = &[
    ("113", "☀️"),
    ("116", "⛅️"),
    ("119", "☁️"),
    ("122", "☁️"),
    ("143", "🌫"),
    ("176", "🌦"),
    ("179", "🌧"),
    ("182", "🌧"),
    ("185", "🌧"),
    ("200", "⛈"),
    ("227", "🌨"),
    ("230", "❄️"),
    ("248", "🌫"),
    ("260", "🌫"),
    ("263", "🌦"),
    ("266", "🌦"),
    ("281", "🌧"),
    ("284", "🌧"),
    ("293", "🌦"),
    ("296", "🌦"),
    ("299", "🌧"),
    ("302", "🌧"),
    ("305", "🌧"),
    ("308", "🌧"),
    ("311", "🌧"),
    ("314", "🌧"),
    ("317", "🌧"),
    ("320", "🌨"),
    ("323", "🌨"),
    ("326", "🌨"),
    ("329", "❄️"),
    ("332", "❄️"),
    ("335", "❄️"),
    ("338", "❄️"),
    ("350", "🌧"),
    ("353", "🌦"),
    ("356", "🌧"),
    ("359", "🌧"),
    ("362", "🌧"),
    ("365", "🌧"),
    ("368", "🌨"),
    ("371", "❄️"),
    ("374", "🌧"),
    ("377", "🌧"),
    ("386", "⛈"),
    ("389", "🌩"),
    ("392", "⛈"),
    ("395", "❄️"),
];

/// Labels for the hourly "chance of" fields, in tooltip order.
///
/// The order here is the order sub-line entries are joined in; it must stay
/// in sync with [`crate::model::HourlyForecast::chance_values`].
pub const CHANCE_LABELS: [&str; 8] = [
    "Sis",
    "Don",
    "Bulutlu",
    "Yağmur",
    "Kar",
    "Güneşli",
    "Gök Gürültüsü",
    "Rüzgarlı",
];

/// Glyph for a weather code, or `None` when the code is not in the table.
pub fn glyph_for(code: &str) -> Option<&'static str> {
    CODE_GLYPHS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, glyph)| *glyph)
}
