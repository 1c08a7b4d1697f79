//! Form interaction controller: one generic Yew component drives the login,
//! signup and create-team forms.
//!
//! Responsibilities
//! - Keep the form's values in a `FormModel` as the user types.
//! - On submit, run the model's validation and hand the result to
//!   `FormFeedback`, then start the timers it asks for.
//! - Log the collected values when the simulated submission completes.

use common::model::{CreateTeamForm, FormModel, LoginForm, SignupForm};
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FormControllerProps;
pub use state::FormController;

pub type LoginController = FormController<LoginForm>;
pub type SignupController = FormController<SignupForm>;
pub type CreateTeamController = FormController<CreateTeamForm>;

impl<F: FormModel> Component for FormController<F> {
    type Message = Msg;
    type Properties = FormControllerProps;

    fn create(ctx: &Context<Self>) -> Self {
        FormController::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
