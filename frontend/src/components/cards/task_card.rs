use common::decorations::task_opacity;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TaskCardProps {
    pub title: AttrValue,
    pub assignee: AttrValue,
    pub due: AttrValue,
}

pub enum Msg {
    SetDone(bool),
}

/// Task row whose card dims while the checkbox is ticked.
pub struct TaskCard {
    done: bool,
}

impl Component for TaskCard {
    type Message = Msg;
    type Properties = TaskCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { done: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetDone(done) => {
                self.done = done;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onchange = ctx.link().callback(|e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            Msg::SetDone(checkbox.checked())
        });

        html! {
            <div class="task-card" style={format!("opacity: {};", task_opacity(self.done))}>
                <input type="checkbox" style="accent-color: var(--primary);" checked={self.done} {onchange} />
                <div class="task-body">
                    <h4>{ props.title.clone() }</h4>
                    <p class="task-meta">{ format!("{} · due {}", props.assignee, props.due) }</p>
                </div>
            </div>
        }
    }
}
