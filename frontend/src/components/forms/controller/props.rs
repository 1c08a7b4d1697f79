//! Properties shared by every form controller instance.

use common::config::FeedbackConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FormControllerProps {
    /// Timer delays and banner policy. Read once, when the component is created.
    #[prop_or_default]
    pub config: FeedbackConfig,
}
