pub mod chat_widget;
pub mod clouds;
pub mod error_toast;
pub mod forecast;
pub mod navbar;
pub mod raindrops;
pub mod weather_card;
