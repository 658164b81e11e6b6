use tracing::{info, warn};
use tripplan_types::{
    FormState, FormValidation, PlanResponse, TripField, TripRequestPayload, messages,
};

use crate::client::{PlanError, PlanningService};
use crate::clock::{Clock, SystemClock};
use crate::feedback::FormFeedback;

/// Result of [`TripRequestForm::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent and the lifecycle flags are untouched
    Blocked(FormValidation),
    /// The service answered with a JSON body
    Planned(PlanResponse),
    /// Transport or service failure; `error_message` now holds the user-facing text
    Failed,
}

/// Stateful controller for the trip request form.
///
/// Holds the field values and the submission lifecycle flags. Validation is never
/// stored: [`TripRequestForm::validation`] derives it from the current fields and
/// the clock on every call.
#[derive(Debug, Clone)]
pub struct TripRequestForm<C: Clock = SystemClock> {
    state: FormState,
    clock: C,
    is_submitting: bool,
    error_message: Option<String>,
}

impl TripRequestForm<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TripRequestForm<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TripRequestForm<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: FormState::default(),
            clock,
            is_submitting: false,
            error_message: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The submit action is disabled while a request is outstanding
    pub fn submit_enabled(&self) -> bool {
        !self.is_submitting
    }

    /// Replace one field; allowed at any time, including mid-submission
    pub fn set_field(&mut self, field: TripField, value: impl Into<String>) {
        self.state.set(field, value);
    }

    pub fn validation(&self) -> FormValidation {
        FormValidation::evaluate(&self.state, self.clock.today())
    }

    pub fn feedback(&self) -> FormFeedback {
        FormFeedback::build(
            &self.state,
            &self.validation(),
            self.is_submitting,
            self.error_message.as_deref(),
        )
    }

    /// First half of a submission.
    ///
    /// Returns `None` without touching any state when the form cannot be
    /// submitted. Otherwise marks the form as submitting, clears the previous
    /// error and returns the payload to send.
    ///
    /// Re-entry while a request is already outstanding is not prevented here;
    /// front ends check [`TripRequestForm::submit_enabled`].
    pub fn begin_submission(&mut self) -> Option<TripRequestPayload> {
        if !self.validation().can_submit() {
            return None;
        }

        let payload = match TripRequestPayload::try_from(&self.state) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "form passed validation but could not build payload");
                return None;
            }
        };

        self.is_submitting = true;
        self.error_message = None;
        Some(payload)
    }

    /// Second half of a submission: apply the service outcome.
    ///
    /// Failures are swallowed into `error_message`; the cause is only logged.
    pub fn finish_submission(
        &mut self,
        result: Result<PlanResponse, PlanError>,
    ) -> Option<PlanResponse> {
        self.is_submitting = false;

        match result {
            Ok(response) => {
                info!(response = %response.as_json(), "trip plan received");
                Some(response)
            }
            Err(err) => {
                warn!(error = %err, "trip request failed");
                self.error_message = Some(messages::SUBMISSION_FAILED.to_string());
                None
            }
        }
    }

    /// Validate, send and apply the outcome in one step
    pub async fn submit<S: PlanningService>(&mut self, service: &S) -> SubmitOutcome {
        let Some(payload) = self.begin_submission() else {
            return SubmitOutcome::Blocked(self.validation());
        };

        let result = service.plan_trip(&payload).await;
        match self.finish_submission(result) {
            Some(response) => SubmitOutcome::Planned(response),
            None => SubmitOutcome::Failed,
        }
    }
}
