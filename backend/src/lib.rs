//! Weather lookup server: a small JSON API over a ladder of weather
//! providers, plus static serving for the built frontend.

pub mod app;
pub mod error;
pub mod provider;
pub mod search_routes;
