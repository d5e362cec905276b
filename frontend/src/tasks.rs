//! Scheduled work for the decorative layers: repeating ticks that can
//! be cancelled and restarted, and the document visibility listener
//! that drives the pausing.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::Callback;
use yew::platform::spawn_local;
use yew::platform::time::sleep;

/// A repeating tick on the yew runtime. `start` spawns a sleep loop;
/// `cancel` (or dropping the ticker) stops it before its next tick.
#[derive(Default)]
pub struct Ticker {
    epoch: Rc<Cell<u64>>,
}

impl Ticker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the loop, cancelling any previous one.
    pub fn start(&mut self, period: Duration, tick: Callback<()>) {
        self.cancel();
        let epoch = self.epoch.clone();
        let current = epoch.get();
        spawn_local(async move {
            loop {
                sleep(period).await;
                if epoch.get() != current {
                    break;
                }
                tick.emit(());
            }
        });
    }

    /// Invalidates the running loop; it exits at its next wake-up
    /// without emitting.
    pub fn cancel(&mut self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Reports `document.hidden` on every visibility change. Dropping the
/// watch removes the listener.
pub struct VisibilityWatch {
    document: web_sys::Document,
    closure: Closure<dyn FnMut()>,
}

impl VisibilityWatch {
    pub fn new(on_change: Callback<bool>) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let observed = document.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            on_change.emit(observed.hidden());
        });
        document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { document, closure })
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            "visibilitychange",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
