//! User-facing strings shown by the trip request form.

/// Inline error under the departure field.
pub const DEPARTURE_IN_PAST: &str = "Departure date cannot be in the past.";

/// Inline error under the return field.
pub const RETURN_BEFORE_DEPARTURE: &str = "Return date cannot be before the departure date.";

/// Inline error under an empty required field.
pub const REQUIRED_FIELD: &str = "This field is required.";

/// Inline error under a date field that does not hold an ISO calendar date.
pub const INVALID_DATE: &str = "Enter a date as YYYY-MM-DD.";

/// Summary line beneath the submit action while a temporal error is active.
pub const FIX_DATES: &str = "Please fix the highlighted dates before submitting.";

/// Summary line beneath the submit action while required input is missing or malformed.
pub const COMPLETE_FORM: &str = "Please complete the highlighted fields before submitting.";

/// The one message shown for any transport or service failure.
pub const SUBMISSION_FAILED: &str = "We couldn't plan your trip right now. Please try again.";

/// Helper line while a request is outstanding.
pub const SUBMITTING: &str = "Planning your trip...";

/// Helper line for a form with nothing to fix.
pub const READY: &str = "Tell us where you would like to go and we'll craft an itinerary.";
