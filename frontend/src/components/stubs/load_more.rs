use yew::prelude::*;

use crate::helpers::{alert, schedule};

#[derive(Properties, PartialEq, Clone)]
pub struct LoadMoreProps {
    pub cooldown_ms: u32,
}

pub enum Msg {
    Clicked,
    Enable,
}

/// "Load More Posts" button: announces the load and stays disabled for a moment.
pub struct LoadMore {
    disabled: bool,
}

impl Component for LoadMore {
    type Message = Msg;
    type Properties = LoadMoreProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { disabled: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Clicked => {
                alert("Loading more posts...");
                self.disabled = true;
                schedule(ctx.link(), ctx.props().cooldown_ms, Msg::Enable);
                true
            }
            Msg::Enable => {
                self.disabled = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <button
                class="btn btn-secondary"
                disabled={self.disabled}
                onclick={ctx.link().callback(|_: MouseEvent| Msg::Clicked)}
            >
                { "Load More Posts" }
            </button>
        }
    }
}
