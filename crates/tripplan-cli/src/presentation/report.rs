use serde::Serialize;
use serde_json::Value;
use tripplan_runtime::{Clock, FormFeedback, TripRequestForm};
use tripplan_types::{FormState, TripField};

/// Machine-readable snapshot of the form, printed with `--format json`
#[derive(Debug, Serialize)]
pub struct FormReport {
    pub form: FormState,
    pub validation: ValidationReport,
    pub feedback: FormFeedback,
    pub is_submitting: bool,
    pub submitted: bool,
    pub error_message: Option<String>,
    pub response: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub departure_before_today: bool,
    pub return_before_departure: bool,
    pub has_temporal_error: bool,
    pub missing: Vec<TripField>,
    pub malformed: Vec<TripField>,
    pub can_submit: bool,
}

impl FormReport {
    pub fn capture<C: Clock>(
        form: &TripRequestForm<C>,
        submitted: bool,
        response: Option<Value>,
    ) -> Self {
        let validation = form.validation();

        Self {
            form: form.state().clone(),
            validation: ValidationReport {
                departure_before_today: validation.departure_before_today,
                return_before_departure: validation.return_before_departure,
                has_temporal_error: validation.has_temporal_error(),
                can_submit: validation.can_submit(),
                missing: validation.missing,
                malformed: validation.malformed,
            },
            feedback: form.feedback(),
            is_submitting: form.is_submitting(),
            submitted,
            error_message: form.error_message().map(str::to_string),
            response,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
