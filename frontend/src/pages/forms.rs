use common::config::FeedbackConfig;
use yew::{html, Html};

use crate::components::forms::controller::{CreateTeamController, LoginController, SignupController};

pub fn login_page(config: &FeedbackConfig) -> Html {
    html! {
        <section class="auth-container">
            <LoginController config={config.clone()} />
            <p class="auth-footer">
                { "Don't have an account? " }<a href="signup.html">{ "Sign up" }</a>
            </p>
        </section>
    }
}

pub fn signup_page(config: &FeedbackConfig) -> Html {
    html! {
        <section class="auth-container">
            <SignupController config={config.clone()} />
            <p class="auth-footer">
                { "Already have an account? " }<a href="login.html">{ "Log in" }</a>
            </p>
        </section>
    }
}

pub fn create_team_page(config: &FeedbackConfig) -> Html {
    html! {
        <section class="form-container">
            <CreateTeamController config={config.clone()} />
        </section>
    }
}
