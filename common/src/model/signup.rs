use serde::Serialize;

use super::field::{Control, FieldId, FieldSpec, SelectOption};
use super::{FormKind, FormModel};
use crate::validation::{rules, ValidationResult};

pub const SIGNUP_MIN_PASSWORD: usize = 8;

pub const ACCOUNT_TYPES: &[SelectOption] = &[
    SelectOption { value: "individual", label: "Individual" },
    SelectOption { value: "team-lead", label: "Team Lead" },
    SelectOption { value: "organization", label: "Organization" },
];

const LAYOUT: &[FieldSpec] = &[
    FieldSpec::new(FieldId::FirstName, "First Name", Control::Text, "John"),
    FieldSpec::new(FieldId::LastName, "Last Name", Control::Text, "Doe"),
    FieldSpec::new(FieldId::Email, "Email", Control::Email, "john.doe@example.com"),
    FieldSpec::new(FieldId::AccountType, "Account Type", Control::Select(ACCOUNT_TYPES), ""),
    FieldSpec::new(FieldId::Password, "Password", Control::Password, "At least 8 characters"),
    FieldSpec::new(FieldId::ConfirmPassword, "Confirm Password", Control::Password, "Repeat your password"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub account_type: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
}

impl Default for SignupForm {
    /// Account type starts on the first option, as a browser `<select>` would.
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            account_type: ACCOUNT_TYPES[0].value.to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl FormModel for SignupForm {
    const KIND: FormKind = FormKind::Signup;

    fn layout() -> &'static [FieldSpec] {
        LAYOUT
    }

    fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::AccountType => &self.account_type,
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
            _ => "",
        }
    }

    fn set_value(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::FirstName => self.first_name = value,
            FieldId::LastName => self.last_name = value,
            FieldId::Email => self.email = value,
            FieldId::AccountType => self.account_type = value,
            FieldId::Password => self.password = value,
            FieldId::ConfirmPassword => self.confirm_password = value,
            _ => {}
        }
    }

    // Account type has no rule.
    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require(
            rules::is_present(&self.first_name),
            FieldId::FirstName,
            "First name is required",
        );
        result.require(
            rules::is_present(&self.last_name),
            FieldId::LastName,
            "Last name is required",
        );
        result.require(
            rules::is_valid_email(&self.email),
            FieldId::Email,
            rules::INVALID_EMAIL,
        );
        result.require(
            rules::has_min_length(&self.password, SIGNUP_MIN_PASSWORD),
            FieldId::Password,
            "Password must be at least 8 characters",
        );
        result.require(
            rules::matches(&self.password, &self.confirm_password),
            FieldId::ConfirmPassword,
            "Passwords do not match",
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SignupForm {
        SignupForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "engine1843".into(),
            confirm_password: "engine1843".into(),
            ..SignupForm::default()
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert!(valid().validate().is_valid());
    }

    #[test]
    fn mismatch_rejected_even_when_both_long_enough() {
        let mut form = valid();
        form.confirm_password = "engine1844".into();
        let result = form.validate();
        assert_eq!(result.len(), 1);
        assert!(result.error_for(FieldId::ConfirmPassword).is_some());
    }

    #[test]
    fn short_and_mismatched_reports_two_errors() {
        let mut form = valid();
        form.password = "short".into();
        let result = form.validate();
        assert!(result.error_for(FieldId::Password).is_some());
        assert!(result.error_for(FieldId::ConfirmPassword).is_some());
    }

    #[test]
    fn short_matching_password_flags_only_length() {
        let mut form = valid();
        form.password = "1234567".into();
        form.confirm_password = "1234567".into();
        let result = form.validate();
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.error_for(FieldId::Password).map(|e| e.message.as_str()),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn account_type_is_not_required() {
        let mut form = valid();
        form.account_type.clear();
        assert!(form.validate().is_valid());
    }

    #[test]
    fn record_uses_camel_case_and_skips_secrets() {
        let record = valid().submission_record();
        assert!(record.contains("\"firstName\":\"Ada\""));
        assert!(record.contains("\"accountType\":\"individual\""));
        assert!(!record.contains("engine1843"));
    }
}
