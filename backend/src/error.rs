use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::ErrorBody;
use log::error;
use thiserror::Error;

use crate::provider::ProviderError;

/// Error surface of the HTTP API. Each variant maps to a status code
/// and a JSON body carrying a user-readable message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("City name is required")]
    EmptyCity,
    #[error("City not found")]
    CityNotFound,
    #[error("Weather service unavailable")]
    Upstream,
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::CityNotFound => ApiError::CityNotFound,
            other => {
                error!("weather lookup failed: {}", other);
                ApiError::Upstream
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyCity => StatusCode::BAD_REQUEST,
            ApiError::CityNotFound => StatusCode::NOT_FOUND,
            ApiError::Upstream => StatusCode::BAD_GATEWAY,
        };
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
