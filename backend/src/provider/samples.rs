//! Canned reports for a handful of cities. Last rung of the provider
//! ladder, so the app stays usable without an API key.

use async_trait::async_trait;
use common::{ForecastDay, WeatherReport};

use super::{ProviderError, WeatherProvider};

#[derive(Debug)]
pub struct SampleProvider;

#[async_trait]
impl WeatherProvider for SampleProvider {
    fn name(&self) -> &'static str {
        "samples"
    }

    async fn report(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        sample_report(city).ok_or(ProviderError::CityNotFound)
    }
}

pub fn sample_report(city: &str) -> Option<WeatherReport> {
    match city.to_lowercase().as_str() {
        "london" => Some(WeatherReport {
            location: "London, UK".to_string(),
            temperature: 12,
            feels_like: 8,
            description: "Partly cloudy".to_string(),
            humidity: 70,
            wind_speed: 8,
            sunrise: "05:45".to_string(),
            sunset: "18:45".to_string(),
            forecast: vec![
                day("Sat", "☀️", 15, "Sunny"),
                day("Sun", "⛅", 13, "Cloudy"),
                day("Mon", "🌧️", 10, "Rainy"),
            ],
        }),
        "new york" => Some(WeatherReport {
            location: "New York, USA".to_string(),
            temperature: 22,
            feels_like: 25,
            description: "Clear sky".to_string(),
            humidity: 45,
            wind_speed: 12,
            sunrise: "06:15".to_string(),
            sunset: "19:30".to_string(),
            forecast: vec![
                day("Sat", "☀️", 25, "Sunny"),
                day("Sun", "☀️", 27, "Hot"),
                day("Mon", "⛅", 23, "Partly cloudy"),
            ],
        }),
        "tokyo" => Some(WeatherReport {
            location: "Tokyo, Japan".to_string(),
            temperature: 18,
            feels_like: 20,
            description: "Light rain".to_string(),
            humidity: 85,
            wind_speed: 6,
            sunrise: "05:30".to_string(),
            sunset: "18:15".to_string(),
            forecast: vec![
                day("Sat", "🌧️", 16, "Rainy"),
                day("Sun", "⛅", 19, "Cloudy"),
                day("Mon", "☀️", 22, "Sunny"),
            ],
        }),
        _ => None,
    }
}

fn day(label: &str, icon: &str, temp: i32, desc: &str) -> ForecastDay {
    ForecastDay {
        day: label.to_string(),
        icon: icon.to_string(),
        temp,
        desc: desc.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let report = sample_report("LoNdOn").unwrap();
        assert_eq!(report.location, "London, UK");
        assert_eq!(report.forecast.len(), 3);
    }

    #[test]
    fn unknown_city_has_no_sample() {
        assert!(sample_report("Atlantis").is_none());
    }

    #[tokio::test]
    async fn provider_reports_unknown_cities_as_not_found() {
        let err = SampleProvider.report("Atlantis").await.unwrap_err();
        assert!(matches!(err, ProviderError::CityNotFound));
    }
}
