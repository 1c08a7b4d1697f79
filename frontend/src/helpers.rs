//! Browser glue shared by the components.
//!
//! - **Timers**: one-shot delayed messages (`schedule`) and a cancellable
//!   `Debouncer` for the search box.
//! - **Clock**: millisecond and ISO-8601 timestamps from `js_sys::Date`.
//! - **Diagnostics**: console records for analytics events and stubs.

use gloo_console::log;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::Component;

/// Posts `msg` to the component after `delay_ms`.
///
/// Fire-and-forget: there is no handle, so the message always arrives unless
/// the component is gone by then.
pub fn schedule<C: Component>(link: &Scope<C>, delay_ms: u32, msg: C::Message) {
    let link = link.clone();
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        link.send_message(msg);
    });
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn iso_now() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

/// Logs a named analytics event with a JSON payload.
pub fn track_event<T: serde::Serialize>(event_name: &str, data: &T) {
    let payload = serde_json::to_string(data).unwrap_or_default();
    log!(format!("Event: {}", event_name), payload);
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Runs only the last call made within the quiet period.
///
/// Each `call` drops the pending `Timeout`, which cancels it.
pub struct Debouncer {
    wait_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: None,
        }
    }

    pub fn call<F: FnOnce() + 'static>(&mut self, f: F) {
        self.pending = Some(Timeout::new(self.wait_ms, f));
    }
}
