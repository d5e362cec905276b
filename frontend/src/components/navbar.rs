use std::time::Duration;

use chrono::Local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::tasks::{Ticker, VisibilityWatch};

const CLOCK_REFRESH: Duration = Duration::from_secs(60);

pub enum Msg {
    ToggleMenu,
    Tick,
    VisibilityChanged(bool),
}

/// Top bar: logo, nav links behind a burger on small screens, and a
/// clock refreshing once a minute. The clock pauses while the page is
/// hidden and catches up on return.
pub struct NavBar {
    hidden_menu: bool,
    time: String,
    clock: Ticker,
    _visibility: Option<VisibilityWatch>,
}

impl Component for NavBar {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut clock = Ticker::new();
        clock.start(CLOCK_REFRESH, ctx.link().callback(|_| Msg::Tick));
        Self {
            hidden_menu: true,
            time: current_time(),
            clock,
            _visibility: VisibilityWatch::new(ctx.link().callback(Msg::VisibilityChanged)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => {
                self.hidden_menu = !self.hidden_menu;
                true
            }
            Msg::Tick => {
                self.time = current_time();
                true
            }
            Msg::VisibilityChanged(hidden) => {
                if hidden {
                    self.clock.cancel();
                    false
                } else {
                    self.clock
                        .start(CLOCK_REFRESH, ctx.link().callback(|_| Msg::Tick));
                    self.time = current_time();
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toggle_menu = ctx.link().callback(|_| Msg::ToggleMenu);
        html! {
            <header>
                <div class="logo-burger">
                    <div class="logo">
                        <Link<Route> to={Route::Home}>{ "SkyCast" }</Link<Route>>
                    </div>
                    <a href="#" onclick={toggle_menu} class="burger">{ "☰" }</a>
                </div>
                <nav class={classes!(self.hidden_menu.then_some("hidden-menu"))}>
                    <menu>
                        <li><Link<Route> to={Route::Home}>{ "Weather" }</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{ "About" }</Link<Route>></li>
                    </menu>
                </nav>
                <div class="clock">{ &self.time }</div>
            </header>
        }
    }
}

fn current_time() -> String {
    Local::now().format("%H:%M").to_string()
}
