//! Top navigation bar: active-link highlighting and the mobile menu toggle.
//!
//! The viewport is re-checked on mount and on every `resize` event. There is
//! no debouncing, so a resize gesture re-runs the check many times. The check
//! is idempotent once the toggle exists.

use common::nav::{is_active, MobileMenu, NAV_LINKS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavbarProps {
    /// File name of the page being shown, e.g. `teams.html`.
    pub current_page: AttrValue,
    pub breakpoint_px: u32,
}

pub enum Msg {
    Viewport,
    ToggleMenu,
}

pub struct Navbar {
    menu: MobileMenu,
    resize_listener: Option<Closure<dyn Fn()>>,
}

impl Component for Navbar {
    type Message = Msg;
    type Properties = NavbarProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            menu: MobileMenu::default(),
            resize_listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Viewport => {
                let width = web_sys::window()
                    .and_then(|window| window.inner_width().ok())
                    .and_then(|width| width.as_f64());
                match width {
                    Some(width) => self.menu.on_viewport(width, ctx.props().breakpoint_px),
                    None => false,
                }
            }
            Msg::ToggleMenu => {
                self.menu.toggle();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let current = ctx.props().current_page.as_str();
        let ontoggle = ctx.link().callback(|_: MouseEvent| Msg::ToggleMenu);

        html! {
            <nav class="navbar">
                <a href="index.html" class="logo">{ "TeamWork" }</a>
                <ul class="nav-links" style={self.menu.display.css()}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li>
                            <a href={link.href} class={classes!(is_active(link.href, current).then_some("active"))}>
                                { link.label }
                            </a>
                        </li>
                    }) }
                </ul>
                if self.menu.toggle_created {
                    <button class="mobile-menu-toggle" onclick={ontoggle}>{ "☰" }</button>
                }
            </nav>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        ctx.link().send_message(Msg::Viewport);

        let link = ctx.link().clone();
        let listener = Closure::<dyn Fn()>::new(move || link.send_message(Msg::Viewport));
        if let Some(window) = web_sys::window() {
            window
                .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                .ok();
        }
        self.resize_listener = Some(listener);
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let (Some(window), Some(listener)) = (web_sys::window(), self.resize_listener.take()) {
            window
                .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                .ok();
        }
    }
}
