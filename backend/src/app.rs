use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::provider::WeatherService;
use crate::search_routes;

// Anything that goes in here must be a handle or pointer that can be
// cloned. The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherService,
}

pub fn create_app(weather: WeatherService, assets_dir: &str) -> Router {
    let state = AppState { weather };

    let app = Router::new()
        .route("/search", post(search_routes::search))
        .route("/api/weather/{city}", get(search_routes::weather_for_city))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Unmatched paths fall back to the built frontend. index.html
    // covers client-side routes like /about.
    let index = Path::new(assets_dir).join("index.html");
    let assets = ServeDir::new(assets_dir).not_found_service(ServeFile::new(index));
    app.fallback_service(assets)
}
