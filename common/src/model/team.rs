use serde::Serialize;

use super::field::{Control, FieldId, FieldSpec, SelectOption};
use super::{FormKind, FormModel};
use crate::validation::{rules, ValidationResult};

pub const TEAM_SIZES: &[SelectOption] = &[
    SelectOption { value: "", label: "Select team size" },
    SelectOption { value: "2-5", label: "2-5 members" },
    SelectOption { value: "6-10", label: "6-10 members" },
    SelectOption { value: "11-20", label: "11-20 members" },
    SelectOption { value: "20+", label: "20+ members" },
];

pub const FOCUS_AREAS: &[SelectOption] = &[
    SelectOption { value: "", label: "Select primary focus" },
    SelectOption { value: "development", label: "Software Development" },
    SelectOption { value: "design", label: "Design" },
    SelectOption { value: "marketing", label: "Marketing" },
    SelectOption { value: "research", label: "Research" },
];

const LAYOUT: &[FieldSpec] = &[
    FieldSpec::new(FieldId::TeamName, "Team Name", Control::Text, "e.g. Team Alpha"),
    FieldSpec::new(
        FieldId::TeamDescription,
        "Description",
        Control::TextArea,
        "What is your team working on?",
    ),
    FieldSpec::new(FieldId::TeamSize, "Team Size", Control::Select(TEAM_SIZES), ""),
    FieldSpec::new(FieldId::PrimaryFocus, "Primary Focus", Control::Select(FOCUS_AREAS), ""),
    FieldSpec::new(
        FieldId::Skills,
        "Required Skills",
        Control::Text,
        "e.g. React, Node.js, Figma",
    ),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamForm {
    pub team_name: String,
    pub team_description: String,
    pub team_size: String,
    pub primary_focus: String,
    pub skills: String,
}

impl FormModel for CreateTeamForm {
    const KIND: FormKind = FormKind::CreateTeam;

    fn layout() -> &'static [FieldSpec] {
        LAYOUT
    }

    fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::TeamName => &self.team_name,
            FieldId::TeamDescription => &self.team_description,
            FieldId::TeamSize => &self.team_size,
            FieldId::PrimaryFocus => &self.primary_focus,
            FieldId::Skills => &self.skills,
            _ => "",
        }
    }

    fn set_value(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::TeamName => self.team_name = value,
            FieldId::TeamDescription => self.team_description = value,
            FieldId::TeamSize => self.team_size = value,
            FieldId::PrimaryFocus => self.primary_focus = value,
            FieldId::Skills => self.skills = value,
            _ => {}
        }
    }

    fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::new();
        result.require(
            rules::is_present(&self.team_name),
            FieldId::TeamName,
            "Team name is required",
        );
        result.require(
            rules::is_present(&self.team_description),
            FieldId::TeamDescription,
            "Description is required",
        );
        result.require(
            rules::is_selected(&self.team_size),
            FieldId::TeamSize,
            "Please select team size",
        );
        result.require(
            rules::is_selected(&self.primary_focus),
            FieldId::PrimaryFocus,
            "Please select primary focus",
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_flags_every_required_field_in_order() {
        let result = CreateTeamForm::default().validate();
        let fields: Vec<_> = result.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                FieldId::TeamName,
                FieldId::TeamDescription,
                FieldId::TeamSize,
                FieldId::PrimaryFocus
            ]
        );
    }

    #[test]
    fn skills_are_optional() {
        let form = CreateTeamForm {
            team_name: "Alpha".into(),
            team_description: "Builds things".into(),
            team_size: "2-5".into(),
            primary_focus: "design".into(),
            skills: String::new(),
        };
        assert!(form.validate().is_valid());
    }

    #[test]
    fn whitespace_description_is_missing() {
        let form = CreateTeamForm {
            team_name: "Alpha".into(),
            team_description: " \n\t ".into(),
            team_size: "6-10".into(),
            primary_focus: "research".into(),
            skills: "Rust".into(),
        };
        let result = form.validate();
        assert_eq!(result.len(), 1);
        assert!(result.error_for(FieldId::TeamDescription).is_some());
    }

    #[test]
    fn select_placeholders_are_empty_values() {
        assert_eq!(TEAM_SIZES[0].value, "");
        assert_eq!(FOCUS_AREAS[0].value, "");
    }
}
