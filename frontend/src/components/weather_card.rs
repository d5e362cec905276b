use std::time::Duration;

use common::{WeatherReport, weather_icon};
use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::components::forecast::ForecastList;

const HIGHLIGHT: Duration = Duration::from_millis(500);
const TAP_PULSE: Duration = Duration::from_millis(600);

#[derive(Clone, Properties, PartialEq)]
pub struct WeatherCardProps {
    pub report: WeatherReport,
}

/// The weather card: current conditions, a detail grid and the
/// forecast strip. New reports flash in briefly; tapping the card
/// pulses it.
#[function_component(WeatherCard)]
pub fn weather_card(props: &WeatherCardProps) -> Html {
    let report = &props.report;

    let highlighted = use_state(|| false);
    {
        let highlighted = highlighted.clone();
        use_effect_with(props.report.clone(), move |_| {
            highlighted.set(true);
            spawn_local(async move {
                sleep(HIGHLIGHT).await;
                highlighted.set(false);
            });
        });
    }

    let pulsing = use_state(|| false);
    let on_tap = {
        let pulsing = pulsing.clone();
        Callback::from(move |_| {
            if *pulsing {
                return;
            }
            pulsing.set(true);
            let pulsing = pulsing.clone();
            spawn_local(async move {
                sleep(TAP_PULSE).await;
                pulsing.set(false);
            });
        })
    };

    let class = classes!(
        "weather-card",
        (*highlighted).then_some("fade-in"),
        (*pulsing).then_some("pulse"),
    );

    html! {
        <div {class} onclick={on_tap}>
            <div class="weather-main">
                <div class="location-row">
                    <span class="location">{ &report.location }</span>
                    <span class="weather-time">{ "Updated just now" }</span>
                </div>
                <div class="current-row">
                    <span class="weather-icon">{ weather_icon(&report.description) }</span>
                    <span class="current-temp">
                        { report.temperature }{ "°" }
                        <span class="temp-unit">{ "C" }</span>
                    </span>
                </div>
                <div class="weather-desc">{ &report.description }</div>
                <div class="feels-like">{ format!("Feels like {}°", report.feels_like) }</div>
            </div>
            <div class="weather-details">
                <div class="detail">
                    <span class="detail-label">{ "Sunrise" }</span>
                    <span class="detail-value">{ &report.sunrise }</span>
                </div>
                <div class="detail">
                    <span class="detail-label">{ "Sunset" }</span>
                    <span class="detail-value">{ &report.sunset }</span>
                </div>
                <div class="detail">
                    <span class="detail-label">{ "Humidity" }</span>
                    <span class="detail-value">{ format!("{}%", report.humidity) }</span>
                </div>
                <div class="detail">
                    <span class="detail-label">{ "Wind" }</span>
                    <span class="detail-value">{ format!("{}km/h", report.wind_speed) }</span>
                </div>
            </div>
            <ForecastList days={report.forecast.clone()} />
        </div>
    }
}
