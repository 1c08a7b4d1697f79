use serde::{Deserialize, Serialize};

/// Stable identifier of a single input control.
///
/// Every field the forms render is addressed through one of these variants,
/// so feedback state and validation errors never depend on markup order or
/// placeholder text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldId {
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    AccountType,
    TeamName,
    TeamDescription,
    TeamSize,
    PrimaryFocus,
    Skills,
}

impl FieldId {
    /// The `id` attribute used for the rendered control.
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm-password",
            FieldId::FirstName => "first-name",
            FieldId::LastName => "last-name",
            FieldId::AccountType => "account-type",
            FieldId::TeamName => "team-name",
            FieldId::TeamDescription => "team-description",
            FieldId::TeamSize => "team-size",
            FieldId::PrimaryFocus => "primary-focus",
            FieldId::Skills => "skills",
        }
    }
}

/// One entry of a `<select>` control. An empty `value` means "nothing chosen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Kind of control a field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    Email,
    Password,
    TextArea,
    Select(&'static [SelectOption]),
}

/// Declarative description of a field: what to render and where its value goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub label: &'static str,
    pub control: Control,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub const fn new(
        id: FieldId,
        label: &'static str,
        control: Control,
        placeholder: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            control,
            placeholder,
        }
    }
}
