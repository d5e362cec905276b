use common::{ErrorBody, SearchQuery, WeatherReport};
use gloo_net::http::Request;

/// Toast text when the input is empty.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name";
/// Toast fallback when the server reports an error without a message.
pub const GENERIC_ERROR_MESSAGE: &str = "Failed to fetch weather data";
/// Toast text when the request or its payload never makes it.
pub const CONNECT_ERROR_MESSAGE: &str = "Unable to connect to weather service";

const SEARCH_ENDPOINT: &str = "/search";

/// Failure modes of a search, reduced to what the toast needs to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The server answered with an error status.
    Api(String),
    /// Transport-level failure, including unparseable payloads.
    Connect,
}

impl SearchError {
    pub fn message(&self) -> &str {
        match self {
            SearchError::Api(message) => message,
            SearchError::Connect => CONNECT_ERROR_MESSAGE,
        }
    }
}

/// Message for a server-reported error, falling back to the generic
/// text when the body carries none.
pub fn api_error_message(body: ErrorBody) -> String {
    body.error
        .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
}

/// One POST to the search endpoint. No timeout and no retry; the
/// request settles when the transport does.
pub async fn search_weather(query: &SearchQuery) -> Result<WeatherReport, SearchError> {
    let response = Request::post(SEARCH_ENDPOINT)
        .json(query)
        .map_err(|err| {
            log::error!("failed to encode search request: {}", err);
            SearchError::Connect
        })?
        .send()
        .await
        .map_err(|err| {
            log::error!("search request failed: {}", err);
            SearchError::Connect
        })?;

    if response.ok() {
        response.json::<WeatherReport>().await.map_err(|err| {
            log::error!("failed to parse weather payload: {}", err);
            SearchError::Connect
        })
    } else {
        match response.json::<ErrorBody>().await {
            Ok(body) => Err(SearchError::Api(api_error_message(body))),
            Err(err) => {
                log::error!("failed to parse error payload: {}", err);
                Err(SearchError::Connect)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        let message = api_error_message(ErrorBody::new("City not found"));
        assert_eq!(message, "City not found");
        assert_eq!(SearchError::Api(message).message(), "City not found");
    }

    #[test]
    fn missing_server_message_falls_back_to_generic_text() {
        let message = api_error_message(ErrorBody { error: None });
        assert_eq!(message, "Failed to fetch weather data");
    }

    #[test]
    fn connect_failures_have_their_own_text() {
        assert_eq!(
            SearchError::Connect.message(),
            "Unable to connect to weather service"
        );
    }
}
