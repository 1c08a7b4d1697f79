use common::config::FeedbackConfig;
use yew::{html, Html};

use crate::components::cards::post_card::PostCard;
use crate::components::stubs::load_more::LoadMore;
use crate::components::stubs::search_box::SearchBox;

const POSTS: [(&str, &str, &str); 3] = [
    ("Sarah Chen", "2 hours ago", "Just shipped the new onboarding flow. Huge thanks to the design crew!"),
    ("Marcus Lee", "5 hours ago", "Looking for a backend dev to join Team Alpha. DM me if interested."),
    ("Priya Patel", "Yesterday", "Our sprint retro notes are up on the team board."),
];

pub fn feed_page(config: &FeedbackConfig) -> Html {
    html! {
        <section class="feed">
            <SearchBox placeholder="Search posts..." debounce_ms={config.search_debounce_ms} />
            { for POSTS.iter().map(|(author, posted, body)| html! {
                <PostCard
                    author={*author}
                    posted={*posted}
                    body={*body}
                    like_flash_ms={config.like_flash_ms}
                />
            }) }
            <LoadMore cooldown_ms={config.load_more_cooldown_ms} />
        </section>
    }
}
