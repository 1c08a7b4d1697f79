use common::decorations::HoverCard;
use yew::{html, Html};

use crate::components::cards::hover_card::HoverCardView;

const FEATURES: [(&str, &str, &str); 3] = [
    ("👥", "Build Teams", "Find people with the skills your project needs."),
    ("✅", "Track Tasks", "Keep everyone's work visible in one place."),
    ("💬", "Share Updates", "Post progress and celebrate wins with your team."),
];

pub fn home_page() -> Html {
    html! {
        <>
            <section class="hero">
                <h1>{ "Collaborate better with TeamWork" }</h1>
                <p>{ "Form teams, plan tasks and keep everyone in the loop." }</p>
                <a href="signup.html" class="btn btn-primary">{ "Get Started" }</a>
            </section>
            <section class="features">
                { for FEATURES.iter().map(|(icon, title, blurb)| html! {
                    <HoverCardView kind={HoverCard::Feature}>
                        <div class="feature-icon">{ *icon }</div>
                        <h3>{ *title }</h3>
                        <p>{ *blurb }</p>
                    </HoverCardView>
                }) }
            </section>
        </>
    }
}
