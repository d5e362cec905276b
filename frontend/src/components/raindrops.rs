use std::time::Duration;

use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

use crate::tasks::{Ticker, VisibilityWatch};

const SPAWN_PERIOD: Duration = Duration::from_millis(150);
const SPAWN_CHANCE: f64 = 0.3;
const DROP_LIFETIME: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
struct Raindrop {
    id: u64,
    left_vw: f64,
    duration_s: f64,
    delay_s: f64,
}

pub enum Msg {
    Tick,
    Expire(u64),
    VisibilityChanged(bool),
}

/// Ambient rain. A spawner tick adds a drop with fixed probability;
/// each drop removes itself after its lifetime. Spawning pauses while
/// the page is hidden, existing drops still drain out.
pub struct RaindropLayer {
    drops: Vec<Raindrop>,
    next_id: u64,
    spawner: Ticker,
    _visibility: Option<VisibilityWatch>,
}

impl Component for RaindropLayer {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut spawner = Ticker::new();
        spawner.start(SPAWN_PERIOD, ctx.link().callback(|_| Msg::Tick));
        Self {
            drops: Vec::new(),
            next_id: 0,
            spawner,
            _visibility: VisibilityWatch::new(ctx.link().callback(Msg::VisibilityChanged)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Tick => {
                if js_sys::Math::random() >= SPAWN_CHANCE {
                    return false;
                }
                let id = self.next_id;
                self.next_id += 1;
                self.drops.push(Raindrop {
                    id,
                    left_vw: js_sys::Math::random() * 100.0,
                    duration_s: 0.5 + js_sys::Math::random() * 0.5,
                    delay_s: js_sys::Math::random() * 2.0,
                });

                let expire = ctx.link().callback(Msg::Expire);
                spawn_local(async move {
                    sleep(DROP_LIFETIME).await;
                    expire.emit(id);
                });
                true
            }
            Msg::Expire(id) => {
                let before = self.drops.len();
                self.drops.retain(|drop| drop.id != id);
                self.drops.len() != before
            }
            Msg::VisibilityChanged(hidden) => {
                if hidden {
                    self.spawner.cancel();
                } else {
                    self.spawner
                        .start(SPAWN_PERIOD, ctx.link().callback(|_| Msg::Tick));
                }
                false
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="rain-layer" aria-hidden="true">
                { for self.drops.iter().map(|drop| {
                    let style = format!(
                        "left: {:.1}vw; animation-duration: {:.2}s; animation-delay: {:.2}s;",
                        drop.left_vw, drop.duration_s, drop.delay_s
                    );
                    html! {
                        <div key={drop.id.to_string()} class="raindrop" style={style} />
                    }
                }) }
            </div>
        }
    }
}
