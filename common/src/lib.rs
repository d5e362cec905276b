use serde::{Deserialize, Serialize};

/// Body of a weather search request: one city name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub city: String,
}

impl SearchQuery {
    /// Normalizes raw user input. Returns `None` when nothing is left
    /// after trimming.
    pub fn new(raw: &str) -> Option<Self> {
        let city = raw.trim();
        if city.is_empty() {
            None
        } else {
            Some(Self {
                city: city.to_string(),
            })
        }
    }
}

/// Current conditions plus a short outlook for one location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub temperature: i32,
    pub feels_like: i32,
    pub description: String,
    pub humidity: u8,
    pub wind_speed: i32,
    pub sunrise: String,
    pub sunset: String,
    pub forecast: Vec<ForecastDay>,
}

/// One entry of the multi-day outlook.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub day: String,
    pub icon: String,
    pub temp: i32,
    pub desc: String,
}

/// Error payload for non-2xx responses. The message is optional on the
/// wire so clients need a fallback text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// Picks the display glyph for a weather description. Keyword ladder,
/// first match wins, case-insensitive.
pub fn weather_icon(description: &str) -> &'static str {
    let description = description.to_lowercase();
    if description.contains("clear") || description.contains("sunny") {
        "☀️"
    } else if description.contains("cloud") {
        "⛅"
    } else if description.contains("rain") {
        "🌧️"
    } else if description.contains("storm") {
        "⛈️"
    } else if description.contains("snow") {
        "❄️"
    } else if description.contains("mist") || description.contains("fog") {
        "🌫️"
    } else {
        "🌤️"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_trims_surrounding_whitespace() {
        let query = SearchQuery::new("  New York \n").unwrap();
        assert_eq!(query.city, "New York");
    }

    #[test]
    fn search_query_rejects_blank_input() {
        assert_eq!(SearchQuery::new(""), None);
        assert_eq!(SearchQuery::new("   "), None);
        assert_eq!(SearchQuery::new("\t\n"), None);
    }

    #[test]
    fn icon_matches_are_case_insensitive() {
        assert_eq!(weather_icon("Light Rain"), "🌧️");
        assert_eq!(weather_icon("THUNDERSTORM"), "⛈️");
        assert_eq!(weather_icon("snow showers"), "❄️");
        assert_eq!(weather_icon("Fog"), "🌫️");
    }

    #[test]
    fn icon_ladder_prefers_earlier_keywords() {
        // Both "clear" and "rain" match; the ladder stops at the first.
        assert_eq!(weather_icon("clearing rain"), "☀️");
        assert_eq!(weather_icon("cloudy with rain"), "⛅");
    }

    #[test]
    fn unrecognized_description_gets_default_icon() {
        assert_eq!(weather_icon("haze"), "🌤️");
        assert_eq!(weather_icon(""), "🌤️");
    }

    #[test]
    fn report_field_names_match_the_wire_format() {
        let report = WeatherReport {
            location: "London, UK".to_string(),
            temperature: 12,
            feels_like: 8,
            description: "Partly cloudy".to_string(),
            humidity: 70,
            wind_speed: 8,
            sunrise: "05:45".to_string(),
            sunset: "18:45".to_string(),
            forecast: vec![ForecastDay {
                day: "Sat".to_string(),
                icon: "☀️".to_string(),
                temp: 15,
                desc: "Sunny".to_string(),
            }],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["location"], "London, UK");
        assert_eq!(value["feels_like"], 8);
        assert_eq!(value["wind_speed"], 8);
        assert_eq!(value["forecast"][0]["day"], "Sat");
        assert_eq!(value["forecast"][0]["desc"], "Sunny");
    }

    #[test]
    fn error_body_message_is_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.error, None);

        let body: ErrorBody = serde_json::from_str(r#"{"error":"City not found"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("City not found"));
    }
}
