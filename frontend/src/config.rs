use common::config::FeedbackConfig;
use gloo_console::warn;

const CONFIG_SELECTOR: &str = "meta[name=\"teamwork-config\"]";

/// Reads the JSON override from `<meta name="teamwork-config" content="...">`.
///
/// Missing tag means defaults; a malformed one is reported and also yields defaults.
pub fn load_config() -> FeedbackConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector(CONFIG_SELECTOR).ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));

    match raw {
        Some(raw) => FeedbackConfig::from_json(&raw).unwrap_or_else(|err| {
            warn!(format!("{}; using defaults", err));
            FeedbackConfig::default()
        }),
        None => FeedbackConfig::default(),
    }
}
