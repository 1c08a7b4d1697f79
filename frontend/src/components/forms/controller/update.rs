//! Update function for the form controller.
//!
//! Elm-style: mutate the controller for `msg` and report whether to re-render.
//! Submitting never short-circuits: the whole form is validated, every failing
//! field is annotated, and the success path only runs when nothing failed.

use common::feedback::{Scheduled, TimerAction};
use common::model::FormModel;
use gloo_console::log;
use yew::prelude::*;

use crate::helpers::{now_ms, schedule};

use super::messages::Msg;
use super::state::FormController;

pub fn update<F: FormModel>(
    component: &mut FormController<F>,
    ctx: &Context<FormController<F>>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Input(field, value) => {
            component.form.set_value(field, value);
            true
        }
        Msg::Submit => {
            let result = component.form.validate();
            let timers = component
                .feedback
                .apply(&result, F::KIND.success_message(), now_ms());

            for Scheduled { delay_ms, action } in timers {
                let msg = match action {
                    // Values are captured now, not when the timer fires.
                    TimerAction::CompleteSubmission => {
                        Msg::Submitted(component.form.submission_record())
                    }
                    other => Msg::Timer(other),
                };
                schedule(ctx.link(), delay_ms, msg);
            }
            true
        }
        Msg::Timer(action) => component.feedback.on_timer(action),
        Msg::Submitted(record) => {
            log!(F::KIND.submitted_label(), record);
            false
        }
    }
}
