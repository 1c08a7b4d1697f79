use common::decorations::HoverCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HoverCardProps {
    pub kind: HoverCard,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    Pointer(bool),
}

/// Card that lifts while the pointer is over it.
pub struct HoverCardView {
    hovered: Option<bool>,
}

impl Component for HoverCardView {
    type Message = Msg;
    type Properties = HoverCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { hovered: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Pointer(over) => {
                self.hovered = Some(over);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        html! {
            <div
                class={classes!(props.kind.class())}
                style={props.kind.transform(self.hovered)}
                onmouseenter={link.callback(|_: MouseEvent| Msg::Pointer(true))}
                onmouseleave={link.callback(|_: MouseEvent| Msg::Pointer(false))}
            >
                { for props.children.iter() }
            </div>
        }
    }
}
