//! Transient feedback attached to a form: per-field error annotations and
//! success banners.
//!
//! `FormFeedback` is a plain state machine. Showing feedback mutates the state
//! and hands back the timers the caller must run; when a timer fires, the
//! caller feeds its `TimerAction` back in. Timer actions carry the id or
//! generation they were scheduled for, so a late timer never touches feedback
//! that replaced its target.

use std::collections::BTreeMap;

use crate::config::{BannerPolicy, FeedbackConfig};
use crate::model::FieldId;
use crate::validation::ValidationResult;

/// Error text shown under a field, plus its border state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAnnotation {
    pub message: String,
    /// Border drawn in the danger color until the revert timer fires.
    pub danger: bool,
    pub generation: u64,
}

/// Success banner rendered as the first child of the form.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: u64,
    pub message: String,
    pub created_at_ms: f64,
    pub dismiss_after_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    RevertBorder { field: FieldId, generation: u64 },
    DismissBanner { banner_id: u64 },
    /// The simulated submission; never cancelled, never de-duplicated.
    CompleteSubmission,
}

/// A one-shot timer the caller has to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub action: TimerAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormFeedback {
    border_revert_ms: u32,
    success_dismiss_ms: u32,
    submit_delay_ms: u32,
    policy: BannerPolicy,
    annotations: BTreeMap<FieldId, FieldAnnotation>,
    banners: Vec<Banner>,
    next_banner_id: u64,
    next_generation: u64,
}

impl FormFeedback {
    pub fn new(config: &FeedbackConfig) -> Self {
        Self {
            border_revert_ms: config.border_revert_ms,
            success_dismiss_ms: config.success_dismiss_ms,
            submit_delay_ms: config.submit_delay_ms,
            policy: config.banner_policy,
            annotations: BTreeMap::new(),
            banners: Vec::new(),
            next_banner_id: 0,
            next_generation: 0,
        }
    }

    /// Renders the outcome of one submit attempt.
    ///
    /// Annotations from the previous pass are dropped first. A failing result
    /// annotates every failing field; a passing one shows `success_message`
    /// and schedules the simulated submission.
    pub fn apply(
        &mut self,
        result: &ValidationResult,
        success_message: &str,
        now_ms: f64,
    ) -> Vec<Scheduled> {
        self.annotations.clear();

        if !result.is_valid() {
            return result
                .field_errors()
                .iter()
                .map(|err| self.show_field_error(err.field, &err.message))
                .collect();
        }

        vec![
            self.show_form_success(success_message, now_ms),
            Scheduled {
                delay_ms: self.submit_delay_ms,
                action: TimerAction::CompleteSubmission,
            },
        ]
    }

    /// Replaces the annotation of `field` and turns its border to danger.
    pub fn show_field_error(&mut self, field: FieldId, message: &str) -> Scheduled {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.annotations.insert(
            field,
            FieldAnnotation {
                message: message.to_string(),
                danger: true,
                generation,
            },
        );
        Scheduled {
            delay_ms: self.border_revert_ms,
            action: TimerAction::RevertBorder { field, generation },
        }
    }

    /// Inserts a success banner at the top of the form.
    pub fn show_form_success(&mut self, message: &str, now_ms: f64) -> Scheduled {
        self.next_banner_id += 1;
        let id = self.next_banner_id;

        if self.policy == BannerPolicy::Replace {
            self.banners.clear();
        }
        // Newest first, mirroring insertion before the form's first child.
        self.banners.insert(
            0,
            Banner {
                id,
                message: message.to_string(),
                created_at_ms: now_ms,
                dismiss_after_ms: self.success_dismiss_ms,
            },
        );

        Scheduled {
            delay_ms: self.success_dismiss_ms,
            action: TimerAction::DismissBanner { banner_id: id },
        }
    }

    /// Clears the danger border if `generation` still owns the annotation.
    /// The error text stays until the next validation pass.
    pub fn revert_border(&mut self, field: FieldId, generation: u64) -> bool {
        match self.annotations.get_mut(&field) {
            Some(annotation) if annotation.generation == generation && annotation.danger => {
                annotation.danger = false;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss_banner(&mut self, banner_id: u64) -> bool {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != banner_id);
        self.banners.len() != before
    }

    /// Applies a fired timer. Returns whether visible state changed;
    /// `CompleteSubmission` leaves feedback untouched.
    pub fn on_timer(&mut self, action: TimerAction) -> bool {
        match action {
            TimerAction::RevertBorder { field, generation } => self.revert_border(field, generation),
            TimerAction::DismissBanner { banner_id } => self.dismiss_banner(banner_id),
            TimerAction::CompleteSubmission => false,
        }
    }

    pub fn annotation(&self, field: FieldId) -> Option<&FieldAnnotation> {
        self.annotations.get(&field)
    }

    pub fn annotations(&self) -> impl Iterator<Item = (&FieldId, &FieldAnnotation)> {
        self.annotations.iter()
    }

    /// Visible banners, newest first.
    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(fields: &[FieldId]) -> ValidationResult {
        let mut result = ValidationResult::new();
        for field in fields {
            result.require(false, *field, "bad");
        }
        result
    }

    #[test]
    fn failure_annotates_each_field_with_revert_timer() {
        let mut feedback = FormFeedback::new(&FeedbackConfig::default());
        let timers = feedback.apply(&failing(&[FieldId::Email, FieldId::Password]), "ok", 0.0);

        assert_eq!(timers.len(), 2);
        assert!(timers.iter().all(|t| t.delay_ms == 3000));
        assert!(feedback.annotation(FieldId::Email).is_some_and(|a| a.danger));
        assert!(feedback.banners().is_empty());
    }

    #[test]
    fn success_schedules_dismissal_and_submission() {
        let mut feedback = FormFeedback::new(&FeedbackConfig::default());
        let timers = feedback.apply(&ValidationResult::new(), "Welcome", 10.0);

        assert_eq!(
            timers,
            vec![
                Scheduled {
                    delay_ms: 2500,
                    action: TimerAction::DismissBanner { banner_id: 1 }
                },
                Scheduled {
                    delay_ms: 1500,
                    action: TimerAction::CompleteSubmission
                },
            ]
        );
        assert_eq!(feedback.banners()[0].message, "Welcome");
        assert_eq!(feedback.banners()[0].created_at_ms, 10.0);
    }

    #[test]
    fn second_error_replaces_first_on_same_field() {
        let mut feedback = FormFeedback::new(&FeedbackConfig::default());
        feedback.show_field_error(FieldId::Email, "first");
        feedback.show_field_error(FieldId::Email, "second");

        assert_eq!(feedback.annotations().count(), 1);
        assert_eq!(
            feedback.annotation(FieldId::Email).map(|a| a.message.as_str()),
            Some("second")
        );
    }

    #[test]
    fn stale_revert_keeps_newer_border() {
        let mut feedback = FormFeedback::new(&FeedbackConfig::default());
        let first = feedback.show_field_error(FieldId::TeamName, "required");
        let second = feedback.show_field_error(FieldId::TeamName, "required");

        assert!(!feedback.on_timer(first.action));
        assert!(feedback.annotation(FieldId::TeamName).is_some_and(|a| a.danger));
        assert!(feedback.on_timer(second.action));

        let annotation = feedback.annotation(FieldId::TeamName);
        assert!(annotation.is_some_and(|a| !a.danger && a.message == "required"));
    }

    #[test]
    fn new_pass_clears_previous_annotations() {
        let mut feedback = FormFeedback::new(&FeedbackConfig::default());
        feedback.apply(&failing(&[FieldId::FirstName, FieldId::LastName]), "ok", 0.0);
        feedback.apply(&failing(&[FieldId::LastName]), "ok", 1.0);

        assert!(feedback.annotation(FieldId::FirstName).is_none());
        assert!(feedback.annotation(FieldId::LastName).is_some());

        feedback.apply(&ValidationResult::new(), "ok", 2.0);
        assert_eq!(feedback.annotations().count(), 0);
    }

    #[test]
    fn replace_policy_keeps_single_banner() {
        let config = FeedbackConfig {
            banner_policy: BannerPolicy::Replace,
            ..FeedbackConfig::default()
        };
        let mut feedback = FormFeedback::new(&config);
        let first = feedback.show_form_success("one", 0.0);
        feedback.show_form_success("two", 100.0);

        assert_eq!(feedback.banners().len(), 1);
        assert_eq!(feedback.banners()[0].message, "two");
        assert!(!feedback.on_timer(first.action));
        assert_eq!(feedback.banners().len(), 1);
    }

    #[test]
    fn default_policy_accumulates_newest_first() {
        let mut feedback = FormFeedback::new(&FeedbackConfig::default());
        let first = feedback.show_form_success("one", 0.0);
        feedback.show_form_success("two", 100.0);

        let messages: Vec<_> = feedback.banners().iter().map(|b| b.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "one"]);

        assert!(feedback.on_timer(first.action));
        assert_eq!(feedback.banners().len(), 1);
        assert_eq!(feedback.banners()[0].message, "two");
    }

    #[test]
    fn submission_timer_changes_nothing() {
        let mut feedback = FormFeedback::new(&FeedbackConfig::default());
        feedback.apply(&ValidationResult::new(), "ok", 0.0);
        let before = feedback.clone();
        assert!(!feedback.on_timer(TimerAction::CompleteSubmission));
        assert_eq!(feedback, before);
    }
}
