use common::decorations::normalize_search;
use gloo_console::log;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::helpers::Debouncer;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBoxProps {
    pub placeholder: AttrValue,
    pub debounce_ms: u32,
}

pub enum Msg {
    Input(String),
}

/// Search field that logs the term once typing pauses.
pub struct SearchBox {
    debouncer: Debouncer,
}

impl Component for SearchBox {
    type Message = Msg;
    type Properties = SearchBoxProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            debouncer: Debouncer::new(ctx.props().debounce_ms),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(term) => {
                let term = normalize_search(&term);
                self.debouncer.call(move || log!("Searching for:", term));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::Input(input.value())
        });

        html! {
            <input
                type="search"
                class="form-input search-input"
                placeholder={ctx.props().placeholder.clone()}
                {oninput}
            />
        }
    }
}
