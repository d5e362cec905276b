#![recursion_limit = "1024"]

use log::debug;

mod components;
mod pages;
mod services;
mod state;
mod tasks;

use components::chat_widget::ChatWidget;
use components::clouds::CloudLayer;
use components::navbar::NavBar;
use components::raindrops::RaindropLayer;
use pages::about::AboutPage;
use pages::home::WeatherPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[not_found]
    #[at("/")]
    Home,
    #[at("/about")]
    About,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <WeatherPage /> },
        Route::About => html! { <AboutPage /> },
    }
}

pub enum Msg {
    PointerMoved { x: f64, y: f64 },
}

/// Application shell: decorative layers behind the routed content,
/// tracking the pointer for the cloud parallax.
pub struct App {
    pointer: (f64, f64),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { pointer: (0.5, 0.5) }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PointerMoved { x, y } => {
                self.pointer = (x, y);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_mouse_move = ctx.link().callback(|event: MouseEvent| {
            let (width, height) = viewport_size();
            Msg::PointerMoved {
                x: f64::from(event.client_x()) / width,
                y: f64::from(event.client_y()) / height,
            }
        });
        let (x, y) = self.pointer;

        html! {
            <div id="page" onmousemove={on_mouse_move}>
                <CloudLayer pointer_x={x} pointer_y={y} />
                <RaindropLayer />
                <BrowserRouter>
                    <NavBar />
                    <main id="main-content">
                        <Switch<Route> render={switch} />
                    </main>
                    <footer>
                        { "Weather data by OpenWeatherMap" }
                    </footer>
                </BrowserRouter>
                <ChatWidget />
            </div>
        }
    }
}

fn viewport_size() -> (f64, f64) {
    web_sys::window()
        .map(|window| {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(1.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(1.0);
            (width.max(1.0), height.max(1.0))
        })
        .unwrap_or((1.0, 1.0))
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    debug!("starting frontend");
    yew::Renderer::<App>::new().render();
}
