use common::config::FeedbackConfig;
use common::model::SelectOption;
use yew::{html, Html};

use crate::components::cards::task_card::TaskCard;
use crate::components::stubs::filter_select::FilterSelect;
use crate::components::stubs::search_box::SearchBox;

const TASK_FILTERS: &[SelectOption] = &[
    SelectOption { value: "all", label: "All Tasks" },
    SelectOption { value: "mine", label: "Assigned to me" },
    SelectOption { value: "overdue", label: "Overdue" },
];

const TASKS: [(&str, &str, &str); 3] = [
    ("Draft project proposal", "Sarah", "Mon"),
    ("Set up CI pipeline", "Marcus", "Wed"),
    ("User interview notes", "Priya", "Fri"),
];

pub fn tasks_page(config: &FeedbackConfig) -> Html {
    html! {
        <section class="tasks">
            <div class="toolbar">
                <SearchBox placeholder="Search tasks..." debounce_ms={config.search_debounce_ms} />
                <FilterSelect options={TASK_FILTERS} />
            </div>
            { for TASKS.iter().map(|(title, assignee, due)| html! {
                <TaskCard title={*title} assignee={*assignee} due={*due} />
            }) }
        </section>
    }
}
