use common::model::SelectOption;
use gloo_console::log;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FilterSelectProps {
    pub options: &'static [SelectOption],
}

/// Filter dropdown; changing it only logs the chosen value.
#[function_component(FilterSelect)]
pub fn filter_select(props: &FilterSelectProps) -> Html {
    let onchange = Callback::from(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        log!("Filter changed to:", select.value());
    });

    html! {
        <select class="form-select" {onchange}>
            { for props.options.iter().map(|opt| html! {
                <option value={opt.value}>{ opt.label }</option>
            }) }
        </select>
    }
}
