use common::config::FeedbackConfig;
use common::decorations::HoverCard;
use common::model::SelectOption;
use yew::{html, Html};

use crate::components::cards::hover_card::HoverCardView;
use crate::components::stubs::filter_select::FilterSelect;
use crate::components::stubs::pagination::Pagination;
use crate::components::stubs::search_box::SearchBox;

const TEAM_FILTERS: &[SelectOption] = &[
    SelectOption { value: "all", label: "All Teams" },
    SelectOption { value: "development", label: "Development" },
    SelectOption { value: "design", label: "Design" },
    SelectOption { value: "marketing", label: "Marketing" },
];

const TEAMS: [(&str, &str, u32); 4] = [
    ("Team Alpha", "Building a realtime chat platform", 5),
    ("Pixel Crafters", "Design system for open-source tools", 3),
    ("Growth Squad", "Launch campaign for a student startup", 4),
    ("Data Nerds", "Visualizing city transit data", 6),
];

pub fn teams_page(config: &FeedbackConfig) -> Html {
    html! {
        <section class="teams">
            <div class="toolbar">
                <SearchBox placeholder="Search teams..." debounce_ms={config.search_debounce_ms} />
                <FilterSelect options={TEAM_FILTERS} />
            </div>
            <div class="team-grid">
                { for TEAMS.iter().map(|(name, about, members)| html! {
                    <HoverCardView kind={HoverCard::Team}>
                        <h3>{ *name }</h3>
                        <p>{ *about }</p>
                        <span class="team-members">{ format!("{} members", members) }</span>
                    </HoverCardView>
                }) }
            </div>
            <Pagination pages={3} />
        </section>
    }
}
