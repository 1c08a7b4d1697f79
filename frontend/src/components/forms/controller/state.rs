//! Runtime state of a form controller: the typed values and the feedback
//! currently rendered around them.

use common::config::FeedbackConfig;
use common::feedback::FormFeedback;
use common::model::FormModel;

/// One mounted form of kind `F`.
///
/// `form` is the single source of truth for field values; inputs are
/// controlled and re-render from it. `feedback` owns the error annotations
/// and the banner slot.
pub struct FormController<F: FormModel> {
    pub form: F,
    pub feedback: FormFeedback,
}

impl<F: FormModel> FormController<F> {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            form: F::default(),
            feedback: FormFeedback::new(config),
        }
    }
}
