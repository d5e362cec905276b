//! OpenWeatherMap client. Two calls per lookup, `/weather` for current
//! conditions and `/forecast` for the 3-hourly feed the outlook is
//! sampled from.

use async_trait::async_trait;
use chrono::{DateTime, Days, FixedOffset, NaiveDate, Offset, Utc};
use common::{ForecastDay, WeatherReport, weather_icon};
use log::warn;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::{ProviderError, WeatherProvider};

/// Entries per day in the 3-hourly forecast feed.
const ENTRIES_PER_DAY: usize = 8;
const OUTLOOK_DAYS: usize = 3;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<OwCurrent, ProviderError> {
        let url = format!("{}/weather", self.base_url);
        let response = self.request(&url, city).await?;
        Ok(response.json::<OwCurrent>().await?)
    }

    async fn fetch_forecast(&self, city: &str) -> Result<OwForecast, ProviderError> {
        let url = format!("{}/forecast", self.base_url);
        let response = self.request(&url, city).await?;
        Ok(response.json::<OwForecast>().await?)
    }

    async fn request(&self, url: &str, city: &str) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ProviderError::CityNotFound);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status,
                body: truncate_body(&body),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn name(&self) -> &'static str {
        "openweathermap"
    }

    async fn report(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let current = self.fetch_current(city).await?;

        // A broken forecast call degrades to the placeholder outlook
        // instead of failing the whole lookup.
        let today = chrono::Local::now().date_naive();
        let outlook = match self.fetch_forecast(city).await {
            Ok(forecast) => daily_outlook(&forecast, today),
            Err(err) => {
                warn!("forecast for '{}' failed: {}", city, err);
                Vec::new()
            }
        };

        Ok(build_report(current, outlook))
    }
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    name: String,
    /// Shift from UTC in seconds at the queried location.
    timezone: i32,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    /// Metres per second when queried with metric units.
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwForecast {
    list: Vec<OwForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn build_report(current: OwCurrent, mut outlook: Vec<ForecastDay>) -> WeatherReport {
    let temperature = current.main.temp.round() as i32;
    if outlook.is_empty() {
        outlook = placeholder_outlook(temperature);
    }

    let description = current
        .weather
        .first()
        .map(|weather| title_case(&weather.description))
        .unwrap_or_else(|| "Unknown".to_string());

    WeatherReport {
        location: format!("{}, {}", current.name, current.sys.country),
        temperature,
        feels_like: current.main.feels_like.round() as i32,
        description,
        humidity: current.main.humidity,
        wind_speed: (current.wind.speed * 3.6).round() as i32,
        sunrise: local_time(current.sys.sunrise, current.timezone),
        sunset: local_time(current.sys.sunset, current.timezone),
        forecast: outlook,
    }
}

/// Samples one entry per day out of the 3-hourly feed and labels it
/// with the weekday it lands on.
fn daily_outlook(forecast: &OwForecast, today: NaiveDate) -> Vec<ForecastDay> {
    (1..=OUTLOOK_DAYS)
        .filter_map(|day| {
            let entry = forecast.list.get(day * ENTRIES_PER_DAY)?;
            let description = entry
                .weather
                .first()
                .map(|weather| weather.description.as_str())
                .unwrap_or("");
            let label = today
                .checked_add_days(Days::new(day as u64))
                .map(|date| date.format("%a").to_string())
                .unwrap_or_else(|| format!("Day {}", day));
            Some(ForecastDay {
                day: label,
                icon: weather_icon(description).to_string(),
                temp: entry.main.temp.round() as i32,
                desc: title_case(description),
            })
        })
        .collect()
}

/// Synthetic outlook derived from the current temperature, used when
/// the forecast feed is unavailable.
fn placeholder_outlook(base_temp: i32) -> Vec<ForecastDay> {
    vec![
        ForecastDay {
            day: "Tomorrow".to_string(),
            icon: "⛅".to_string(),
            temp: base_temp + 2,
            desc: "Cloudy".to_string(),
        },
        ForecastDay {
            day: "Day 2".to_string(),
            icon: "☀️".to_string(),
            temp: base_temp + 3,
            desc: "Sunny".to_string(),
        },
        ForecastDay {
            day: "Day 3".to_string(),
            icon: "🌧️".to_string(),
            temp: base_temp - 1,
            desc: "Rainy".to_string(),
        },
    ]
}

/// Formats a unix timestamp as HH:MM in the location's own UTC shift.
fn local_time(timestamp: i64, offset_seconds: i32) -> String {
    let offset = FixedOffset::east_opt(offset_seconds).unwrap_or_else(|| Utc.fix());
    match DateTime::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.with_timezone(&offset).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_body(body: &str) -> String {
    const MAX_CHARS: usize = 200;
    if body.chars().count() > MAX_CHARS {
        let truncated: String = body.chars().take(MAX_CHARS).collect();
        format!("{}...", truncated)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_fixture() -> OwCurrent {
        serde_json::from_value(json!({
            "name": "London",
            "timezone": 3600,
            "main": { "temp": 11.6, "feels_like": 8.4, "humidity": 70 },
            "weather": [{ "description": "light rain" }],
            "wind": { "speed": 4.1 },
            "sys": { "country": "GB", "sunrise": 3600, "sunset": 46800 }
        }))
        .unwrap()
    }

    fn forecast_fixture(entries: usize) -> OwForecast {
        let list: Vec<_> = (0..entries)
            .map(|index| {
                let description = match index {
                    16 => "clear sky",
                    24 => "light rain",
                    _ => "scattered clouds",
                };
                json!({
                    "main": { "temp": index as f64, "feels_like": index as f64, "humidity": 60 },
                    "weather": [{ "description": description }]
                })
            })
            .collect();
        serde_json::from_value(json!({ "list": list })).unwrap()
    }

    #[test]
    fn report_converts_units_and_formats_times() {
        let report = build_report(current_fixture(), Vec::new());
        assert_eq!(report.location, "London, GB");
        assert_eq!(report.temperature, 12);
        assert_eq!(report.feels_like, 8);
        assert_eq!(report.description, "Light Rain");
        assert_eq!(report.humidity, 70);
        // 4.1 m/s is 14.76 km/h.
        assert_eq!(report.wind_speed, 15);
        // Timestamps shift by the location's one hour offset.
        assert_eq!(report.sunrise, "02:00");
        assert_eq!(report.sunset, "14:00");
    }

    #[test]
    fn missing_outlook_falls_back_to_placeholder_days() {
        let report = build_report(current_fixture(), Vec::new());
        let days: Vec<_> = report.forecast.iter().map(|day| day.day.as_str()).collect();
        assert_eq!(days, ["Tomorrow", "Day 2", "Day 3"]);
        assert_eq!(report.forecast[0].temp, 14);
        assert_eq!(report.forecast[1].temp, 15);
        assert_eq!(report.forecast[2].temp, 11);
    }

    #[test]
    fn outlook_samples_one_entry_per_day() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        let outlook = daily_outlook(&forecast_fixture(33), today);
        assert_eq!(outlook.len(), 3);

        let days: Vec<_> = outlook.iter().map(|day| day.day.as_str()).collect();
        assert_eq!(days, ["Sat", "Sun", "Mon"]);
        // Entries 8, 16 and 24 of the feed.
        let temps: Vec<_> = outlook.iter().map(|day| day.temp).collect();
        assert_eq!(temps, [8, 16, 24]);
        assert_eq!(outlook[0].desc, "Scattered Clouds");
        let icons: Vec<_> = outlook.iter().map(|day| day.icon.as_str()).collect();
        assert_eq!(icons, ["⛅", "☀️", "🌧️"]);
    }

    #[test]
    fn short_feed_yields_a_short_outlook() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 7).unwrap();
        let outlook = daily_outlook(&forecast_fixture(10), today);
        assert_eq!(outlook.len(), 1);
        assert_eq!(outlook[0].day, "Sat");
    }

    #[test]
    fn local_time_honors_the_offset() {
        assert_eq!(local_time(0, 0), "00:00");
        assert_eq!(local_time(0, 3600), "01:00");
        assert_eq!(local_time(45_240, 0), "12:34");
        assert_eq!(local_time(0, -18_000), "19:00");
    }

    #[test]
    fn descriptions_are_title_cased() {
        assert_eq!(title_case("light rain"), "Light Rain");
        assert_eq!(title_case("overcast clouds"), "Overcast Clouds");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn long_error_bodies_are_truncated_on_char_boundaries() {
        let body = "ä".repeat(300);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.chars().count(), 203);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }
}
