//! View rendering for the form controller.
//!
//! Renders the success banners first (newest on top), then one group per
//! field in layout order: label, control, and the field's error text when it
//! has one. A field with an annotation gets an inline border color that
//! follows the annotation's danger state.

use common::feedback::{Banner, FieldAnnotation};
use common::model::{Control, FieldSpec, FormModel};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::FormController;

const SUCCESS_STYLE: &str = "padding: 12px 16px; \
    border-radius: var(--radius); \
    margin-bottom: 16px; \
    background-color: #d1fae5; \
    border: 1px solid var(--success);";

pub fn view<F: FormModel>(component: &FormController<F>, ctx: &Context<FormController<F>>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form id={F::KIND.dom_id()} class="form-card" novalidate={true} {onsubmit}>
            { for component.feedback.banners().iter().map(success_banner) }
            <h2 class="form-title">{ F::KIND.title() }</h2>
            { for F::layout().iter().map(|spec| field_group(component, link, spec)) }
            <button type="submit" class="btn btn-primary btn-full">{ F::KIND.submit_label() }</button>
        </form>
    }
}

fn success_banner(banner: &Banner) -> Html {
    html! {
        <div key={banner.id.to_string()} class="form-success" style={SUCCESS_STYLE}>
            { banner.message.clone() }
        </div>
    }
}

fn border_style(annotation: Option<&FieldAnnotation>) -> Option<&'static str> {
    annotation.map(|a| {
        if a.danger {
            "border-color: var(--danger);"
        } else {
            "border-color: var(--border);"
        }
    })
}

fn field_group<F: FormModel>(
    component: &FormController<F>,
    link: &Scope<FormController<F>>,
    spec: &FieldSpec,
) -> Html {
    let field = spec.id;
    let annotation = component.feedback.annotation(field);
    let style = border_style(annotation);
    let value = component.form.value(field).to_string();

    let control = match spec.control {
        Control::Text | Control::Email | Control::Password => {
            let input_type = match spec.control {
                Control::Email => "email",
                Control::Password => "password",
                _ => "text",
            };
            let oninput = link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::Input(field, input.value())
            });
            html! {
                <input
                    id={field.dom_id()}
                    type={input_type}
                    class="form-input"
                    placeholder={spec.placeholder}
                    {value}
                    {style}
                    {oninput}
                />
            }
        }
        Control::TextArea => {
            let oninput = link.callback(move |e: InputEvent| {
                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                Msg::Input(field, textarea.value())
            });
            html! {
                <textarea
                    id={field.dom_id()}
                    class="form-input"
                    rows={4}
                    placeholder={spec.placeholder}
                    {value}
                    {style}
                    {oninput}
                />
            }
        }
        Control::Select(options) => {
            let onchange = link.callback(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                Msg::Input(field, select.value())
            });
            html! {
                <select id={field.dom_id()} class="form-input" {style} {onchange}>
                    { for options.iter().map(|opt| html! {
                        <option value={opt.value} selected={opt.value == value}>{ opt.label }</option>
                    }) }
                </select>
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={field.dom_id()}>{ spec.label }</label>
            { control }
            if let Some(annotation) = annotation {
                <div class="form-error">{ annotation.message.clone() }</div>
            }
        </div>
    }
}
