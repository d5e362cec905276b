use std::time::Duration;

use yew::platform::spawn_local;
use yew::platform::time::sleep;
use yew::prelude::*;

const BUBBLE_LIFETIME: Duration = Duration::from_secs(5);

const RESPONSES: [&str; 5] = [
    "Hello! I'm your weather assistant. How can I help you today?",
    "Looking for weather in a specific city? Just type it in the search box!",
    "Want to know about tomorrow's weather? Check the 3-day forecast!",
    "Need weather advice? I can help with outfit suggestions based on the conditions!",
    "Curious about weather patterns? Ask me anything about meteorology!",
];

pub enum Msg {
    Open,
    Dismiss,
    Expire(u32),
}

/// Canned chat assistant. The button shows a random line in a bubble
/// that goes away on click or after a few seconds.
pub struct ChatWidget {
    bubble: Option<&'static str>,
    generation: u32,
}

impl Component for ChatWidget {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            bubble: None,
            generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Open => {
                let pick = (js_sys::Math::random() * RESPONSES.len() as f64) as usize;
                self.bubble = Some(RESPONSES[pick.min(RESPONSES.len() - 1)]);

                self.generation = self.generation.wrapping_add(1);
                let generation = self.generation;
                let expire = ctx.link().callback(Msg::Expire);
                spawn_local(async move {
                    sleep(BUBBLE_LIFETIME).await;
                    expire.emit(generation);
                });
                true
            }
            Msg::Dismiss => {
                self.bubble = None;
                true
            }
            Msg::Expire(generation) => {
                if generation == self.generation && self.bubble.is_some() {
                    self.bubble = None;
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let open = ctx.link().callback(|_| Msg::Open);
        let dismiss = ctx.link().callback(|_| Msg::Dismiss);

        html! {
            <div class="chat-widget">
                if let Some(message) = self.bubble {
                    <div class="chat-bubble" onclick={dismiss}>{ message }</div>
                }
                <button class="chat-button" onclick={open}>{ "💬" }</button>
            </div>
        }
    }
}
