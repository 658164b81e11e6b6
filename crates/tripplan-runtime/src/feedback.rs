use serde::Serialize;
use tripplan_types::{FormState, FormValidation, TripField, messages};

/// What a front end should display for the current form: each input with its
/// inline error, whether the submit action is enabled, and the line beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFeedback {
    pub fields: Vec<FieldFeedback>,
    pub submit_enabled: bool,
    pub helper: HelperLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldFeedback {
    pub field: TripField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HelperKind {
    Hint,
    Progress,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelperLine {
    pub kind: HelperKind,
    pub text: String,
}

impl HelperLine {
    fn new(kind: HelperKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl FormFeedback {
    pub fn build(
        state: &FormState,
        validation: &FormValidation,
        is_submitting: bool,
        error_message: Option<&str>,
    ) -> Self {
        let fields = TripField::ALL
            .into_iter()
            .map(|field| FieldFeedback {
                field,
                label: field.label(),
                value: state.get(field).to_string(),
                error: validation.field_error(field),
            })
            .collect();

        let helper = if is_submitting {
            HelperLine::new(HelperKind::Progress, messages::SUBMITTING)
        } else if validation.has_temporal_error() {
            HelperLine::new(HelperKind::Error, messages::FIX_DATES)
        } else if let Some(message) = error_message {
            HelperLine::new(HelperKind::Error, message)
        } else if let Some(summary) = validation.summary() {
            HelperLine::new(HelperKind::Error, summary)
        } else {
            HelperLine::new(HelperKind::Hint, messages::READY)
        };

        Self {
            fields,
            submit_enabled: !is_submitting,
            helper,
        }
    }

    pub fn field(&self, field: TripField) -> Option<&FieldFeedback> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn has_errors(&self) -> bool {
        self.helper.kind == HelperKind::Error
    }
}
