use common::decorations::is_pagination_label;
use gloo_console::log;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PaginationProps {
    pub pages: u32,
}

/// Page buttons that log the requested page instead of navigating.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let labels = std::iter::once("← Prev".to_string())
        .chain((1..=props.pages).map(|page| page.to_string()))
        .chain(std::iter::once("Next →".to_string()));

    html! {
        <div class="pagination">
            { for labels.map(|label| {
                let onclick = is_pagination_label(&label).then(|| {
                    let label = label.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        log!("Navigate to page:", label.clone());
                    })
                });
                html! { <button class="btn outline" {onclick}>{ label }</button> }
            }) }
        </div>
    }
}
