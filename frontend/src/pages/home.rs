use std::time::Duration;

use common::{SearchQuery, WeatherReport};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::components::error_toast::ErrorToast;
use crate::components::weather_card::WeatherCard;
use crate::services::{self, SearchError};
use crate::state::{SearchFlow, Submission, ToastState};

const DEFAULT_CITY: &str = "London";
const QUICK_CITIES: [&str; 4] = ["London", "New York", "Tokyo", "Paris"];
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

pub enum Msg {
    Submit,
    QuickSearch(&'static str),
    Loaded(WeatherReport),
    Failed(SearchError),
    DismissToast,
    ToastExpired(u32),
}

/// The search page. Owns the whole request and render lifecycle: the
/// in-flight flag, the toast and the last report.
pub struct WeatherPage {
    flow: SearchFlow,
    toast: ToastState,
    report: Option<WeatherReport>,
    city_input: NodeRef,
}

impl Component for WeatherPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            flow: SearchFlow::default(),
            toast: ToastState::default(),
            report: None,
            city_input: NodeRef::default(),
        };
        // Landing view starts with a city already loaded, fetched
        // through the normal flow without touching the input field.
        if let Some(query) = page.flow.dispatch(SearchQuery {
            city: DEFAULT_CITY.to_string(),
        }) {
            Self::run_search(ctx, query);
        }
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => self.submit(ctx),
            Msg::QuickSearch(city) => {
                if let Some(input) = self.city_input.cast::<HtmlInputElement>() {
                    input.set_value(city);
                }
                self.submit(ctx)
            }
            Msg::Loaded(report) => {
                self.flow.settle();
                if let Some(input) = self.city_input.cast::<HtmlInputElement>() {
                    input.set_value("");
                }
                self.report = Some(report);
                true
            }
            Msg::Failed(error) => {
                self.flow.settle();
                self.show_toast(ctx, error.message().to_string());
                true
            }
            Msg::DismissToast => {
                self.toast.dismiss();
                true
            }
            Msg::ToastExpired(generation) => self.toast.expire(generation),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });
        let loading = self.flow.is_loading();

        html! {
            <div class="weather-page">
                if let Some(message) = self.toast.message() {
                    <ErrorToast
                        message={message.to_string()}
                        on_dismiss={ctx.link().callback(|_| Msg::DismissToast)}
                    />
                }
                <form class="search-bar" onsubmit={onsubmit}>
                    <input
                        ref={self.city_input.clone()}
                        type="text"
                        class="city-input"
                        placeholder="Search for a city..."
                    />
                    <button type="submit" class="search-btn" disabled={loading}>
                        if loading {
                            <span class="search-loading">{ "Searching..." }</span>
                        } else {
                            <span class="search-text">{ "Search" }</span>
                        }
                    </button>
                </form>
                <div class="quick-cities">
                    { for QUICK_CITIES.iter().copied().map(|city| {
                        let onclick = ctx.link().callback(move |_| Msg::QuickSearch(city));
                        html! {
                            <button class="quick-city" {onclick}>{ city }</button>
                        }
                    }) }
                </div>
                if let Some(report) = &self.report {
                    <WeatherCard report={report.clone()} />
                }
                if loading {
                    <div class="loading-overlay">
                        <div class="spinner" />
                        <span>{ "Fetching weather..." }</span>
                    </div>
                }
            </div>
        }
    }
}

impl WeatherPage {
    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        let raw = self
            .city_input
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default();

        match self.flow.submit(&raw) {
            Submission::EmptyInput => {
                self.show_toast(ctx, services::EMPTY_INPUT_MESSAGE.to_string());
                true
            }
            Submission::AlreadyInFlight => false,
            Submission::Dispatch(query) => {
                Self::run_search(ctx, query);
                true
            }
        }
    }

    fn run_search(ctx: &Context<Self>, query: SearchQuery) {
        let loaded = ctx.link().callback(Msg::Loaded);
        let failed = ctx.link().callback(Msg::Failed);
        spawn_local(async move {
            match services::search_weather(&query).await {
                Ok(report) => loaded.emit(report),
                Err(error) => failed.emit(error),
            }
        });
    }

    fn show_toast(&mut self, ctx: &Context<Self>, message: String) {
        let generation = self.toast.show(message);
        let expired = ctx.link().callback(Msg::ToastExpired);
        spawn_local(async move {
            sleep(TOAST_LIFETIME).await;
            expired.emit(generation);
        });
    }
}
