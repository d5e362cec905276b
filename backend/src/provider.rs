use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use common::WeatherReport;
use log::warn;
use thiserror::Error;

use crate::provider::openweather::OpenWeatherProvider;
use crate::provider::samples::SampleProvider;

pub mod openweather;
pub mod samples;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("city not found")]
    CityNotFound,
    #[error("request to weather provider failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("weather provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("no weather provider could answer")]
    Exhausted,
}

/// A source of weather reports. Providers are tried in order by
/// [`WeatherService`]; any failure falls through to the next one.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    fn name(&self) -> &'static str;

    async fn report(&self, city: &str) -> Result<WeatherReport, ProviderError>;
}

#[derive(Debug, Clone)]
pub struct WeatherService {
    providers: Arc<Vec<Box<dyn WeatherProvider>>>,
}

impl WeatherService {
    pub fn new(providers: Vec<Box<dyn WeatherProvider>>) -> Self {
        Self {
            providers: Arc::new(providers),
        }
    }

    /// Assembles the default ladder: the real API when a key is
    /// configured, canned sample cities as fallback.
    pub fn from_config(api_key: Option<String>, base_url: String) -> Self {
        let mut providers: Vec<Box<dyn WeatherProvider>> = Vec::new();
        if let Some(api_key) = api_key {
            providers.push(Box::new(OpenWeatherProvider::new(api_key, base_url)));
        }
        providers.push(Box::new(SampleProvider));
        Self::new(providers)
    }

    /// Asks each provider in turn and returns the first report. An
    /// unknown city only counts when no later provider knows it
    /// either.
    pub async fn report_for(&self, city: &str) -> Result<WeatherReport, ProviderError> {
        let mut not_found = false;
        for provider in self.providers.iter() {
            match provider.report(city).await {
                Ok(report) => return Ok(report),
                Err(ProviderError::CityNotFound) => {
                    not_found = true;
                }
                Err(err) => {
                    warn!("provider {} failed: {}", provider.name(), err);
                }
            }
        }
        if not_found {
            Err(ProviderError::CityNotFound)
        } else {
            Err(ProviderError::Exhausted)
        }
    }
}
