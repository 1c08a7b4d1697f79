//! Form models: the values a user has typed, one struct per form kind.

use serde::Serialize;

use crate::validation::ValidationResult;

pub mod field;
pub mod login;
pub mod signup;
pub mod team;

pub use field::{Control, FieldId, FieldSpec, SelectOption};
pub use login::LoginForm;
pub use signup::SignupForm;
pub use team::CreateTeamForm;

/// The three forms the site hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Signup,
    CreateTeam,
}

impl FormKind {
    /// `id` of the rendered `<form>` element.
    pub fn dom_id(self) -> &'static str {
        match self {
            FormKind::Login => "loginForm",
            FormKind::Signup => "signupForm",
            FormKind::CreateTeam => "createTeamForm",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormKind::Login => "Welcome Back",
            FormKind::Signup => "Create Your Account",
            FormKind::CreateTeam => "Create a New Team",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Login => "Log In",
            FormKind::Signup => "Sign Up",
            FormKind::CreateTeam => "Create Team",
        }
    }

    /// Banner text shown when every rule passes.
    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Login => "Login successful! Redirecting...",
            FormKind::Signup => "Account created successfully! Redirecting...",
            FormKind::CreateTeam => "Team created successfully! Redirecting...",
        }
    }

    /// Prefix of the diagnostic record logged by the simulated submission.
    pub fn submitted_label(self) -> &'static str {
        match self {
            FormKind::Login => "User logged in:",
            FormKind::Signup => "User signed up:",
            FormKind::CreateTeam => "Team created:",
        }
    }
}

/// Shared contract of every form: a field layout, per-field access, and a
/// pure validation pass.
///
/// `Serialize` produces the diagnostic submission record; secret fields are
/// skipped by the implementors.
pub trait FormModel: Default + Clone + PartialEq + Serialize + 'static {
    const KIND: FormKind;

    /// Fields in render order. Validation errors follow the same order.
    fn layout() -> &'static [FieldSpec];

    /// Current value of `field`, or `""` when the form has no such field.
    fn value(&self, field: FieldId) -> &str;

    /// Stores `value` into `field`. Unknown fields are ignored.
    fn set_value(&mut self, field: FieldId, value: String);

    /// Runs every rule of the form; never short-circuits.
    fn validate(&self) -> ValidationResult;

    /// JSON rendering of the collected values, standing in for a request body.
    fn submission_record(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
