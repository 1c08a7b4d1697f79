//! Page bodies. Each page is a plain function of the loaded configuration;
//! the interactive parts are components under `crate::components`.

mod feed;
mod forms;
mod home;
mod tasks;
mod teams;

use common::config::FeedbackConfig;
use common::nav::Page;
use yew::Html;

pub fn render(page: Page, config: &FeedbackConfig) -> Html {
    match page {
        Page::Home => home::home_page(),
        Page::Login => forms::login_page(config),
        Page::Signup => forms::signup_page(config),
        Page::CreateTeam => forms::create_team_page(config),
        Page::Teams => teams::teams_page(config),
        Page::Feed => feed::feed_page(config),
        Page::Tasks => tasks::tasks_page(config),
    }
}
