pub mod hover_card;
pub mod post_card;
pub mod task_card;
