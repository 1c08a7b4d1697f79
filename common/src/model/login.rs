use serde::Serialize;

use super::field::{Control, FieldId, FieldSpec};
use super::{FormKind, FormModel};
use crate::validation::{rules, ValidationResult};

pub const LOGIN_MIN_PASSWORD: usize = 6;

const LAYOUT: &[FieldSpec] = &[
    FieldSpec::new(FieldId::Email, "Email", Control::Email, "you@example.com"),
    FieldSpec::new(FieldId::Password, "Password", Control::Password, "Enter your password"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl FormModel for LoginForm {
    const KIND: FormKind = FormKind::Login;

    fn layout() -> &'static [FieldSpec] {
        LAYOUT
    }

    fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            _ => "",
        }
    }

    fn set_value(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Email => self.email = value,
            FieldId::Password => self.password = value,
            _ => {}
        }
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require(
            rules::is_valid_email(&self.email),
            FieldId::Email,
            rules::INVALID_EMAIL,
        );
        result.require(
            rules::has_min_length(&self.password, LOGIN_MIN_PASSWORD),
            FieldId::Password,
            "Password must be at least 6 characters",
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn accepts_valid_credentials() {
        assert!(form("user@test.com", "abc123").validate().is_valid());
    }

    #[test]
    fn reports_both_fields_together() {
        let result = form("not-an-email", "abc").validate();
        let fields: Vec<_> = result.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![FieldId::Email, FieldId::Password]);
    }

    #[test]
    fn submission_record_omits_password() {
        let record = form("user@test.com", "hunter22").submission_record();
        assert!(record.contains("user@test.com"));
        assert!(!record.contains("hunter22"));
    }

    #[test]
    fn set_value_routes_to_field() {
        let mut login = LoginForm::default();
        login.set_value(FieldId::Email, "a@b.c".into());
        login.set_value(FieldId::TeamName, "ignored".into());
        assert_eq!(login.value(FieldId::Email), "a@b.c");
        assert_eq!(login.value(FieldId::TeamName), "");
    }
}
