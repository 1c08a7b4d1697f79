use common::config::FeedbackConfig;
use common::decorations::PageView;
use common::nav::{current_page, Page};
use gloo_console::log;
use yew::{html, Component, Context, Html};

use crate::components::navbar::Navbar;
use crate::config::load_config;
use crate::helpers::{iso_now, track_event};
use crate::pages;

/// Root component: resolves the page from the URL once and renders it under
/// the navbar.
pub struct App {
    config: FeedbackConfig,
    page_file: String,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let pathname = web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default();

        track_event(
            "page_view",
            &PageView {
                page: pathname.clone(),
                timestamp: iso_now(),
            },
        );

        Self {
            config: load_config(),
            page_file: current_page(&pathname).to_string(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <Navbar
                    current_page={self.page_file.clone()}
                    breakpoint_px={self.config.mobile_breakpoint_px}
                />
                <main class="container">
                    { pages::render(Page::from_file(&self.page_file), &self.config) }
                </main>
            </>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            log!("✅ TeamWork Frontend Initialized");
        }
    }
}
