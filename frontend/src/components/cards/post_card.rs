use common::decorations::{PostAction, LIKED_LABEL};
use yew::prelude::*;

use crate::helpers::{alert, schedule};

#[derive(Properties, PartialEq, Clone)]
pub struct PostCardProps {
    pub author: AttrValue,
    pub posted: AttrValue,
    pub body: AttrValue,
    pub like_flash_ms: u32,
}

pub enum Msg {
    /// A caption was clicked; the action is recovered from its text.
    Clicked(&'static str),
    ResetLike,
}

/// Feed post with Like / Comment / Share buttons.
pub struct PostCard {
    liked: bool,
}

const ACTIONS: [PostAction; 3] = [PostAction::Like, PostAction::Comment, PostAction::Share];

impl Component for PostCard {
    type Message = Msg;
    type Properties = PostCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { liked: false }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Clicked(caption) => match PostAction::from_label(caption) {
                Some(PostAction::Like) => {
                    self.liked = true;
                    schedule(ctx.link(), ctx.props().like_flash_ms, Msg::ResetLike);
                    true
                }
                Some(action) => {
                    if let Some(notice) = action.coming_soon() {
                        alert(notice);
                    }
                    false
                }
                None => false,
            },
            Msg::ResetLike => {
                self.liked = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <article class="post-card">
                <header class="post-header">
                    <strong>{ props.author.clone() }</strong>
                    <span class="post-time">{ props.posted.clone() }</span>
                </header>
                <p class="post-body">{ props.body.clone() }</p>
                <div class="post-actions">
                    { for ACTIONS.iter().map(|action| {
                        let liked = *action == PostAction::Like && self.liked;
                        let caption = if liked { LIKED_LABEL } else { action.label() };
                        let style = if liked { "color: var(--primary);" } else { "color: var(--gray);" };
                        html! {
                            <button class="action-btn" {style} onclick={link.callback(move |e: MouseEvent| {
                                e.prevent_default();
                                Msg::Clicked(caption)
                            })}>
                                { caption }
                            </button>
                        }
                    }) }
                </div>
            </article>
        }
    }
}
