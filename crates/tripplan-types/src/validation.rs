use chrono::NaiveDate;
use serde::Serialize;

use crate::form::{FormState, TripField};
use crate::messages;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` calendar date.
///
/// Only the zero-padded form is accepted, so the payload always carries the date
/// exactly as it was entered.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    if !has_iso_date_shape(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

/// Digits everywhere except `-` at offsets 4 and 7; chrono alone tolerates padding and signs
fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Validation state derived from a [`FormState`] and today's date.
///
/// Never stored: build it again whenever the form changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    /// Departure is set and strictly earlier than today
    pub departure_before_today: bool,
    /// Both dates are set and return is strictly earlier than departure
    pub return_before_departure: bool,
    /// Required fields that are empty
    pub missing: Vec<TripField>,
    /// Date fields that are set but not `YYYY-MM-DD`
    pub malformed: Vec<TripField>,
}

impl FormValidation {
    pub fn evaluate(state: &FormState, today: NaiveDate) -> Self {
        let missing = TripField::ALL
            .into_iter()
            .filter(|field| field.is_required() && !state.is_set(*field))
            .collect();

        let departure = date_field(state, TripField::DepartureDate);
        let return_date = date_field(state, TripField::ReturnDate);

        let malformed = [
            (TripField::DepartureDate, &departure),
            (TripField::ReturnDate, &return_date),
        ]
        .into_iter()
        .filter_map(|(field, parsed)| matches!(parsed, DateInput::Malformed).then_some(field))
        .collect();

        let departure_before_today =
            matches!(departure, DateInput::Valid(date) if date < today);

        let return_before_departure = match (&departure, &return_date) {
            (DateInput::Valid(dep), DateInput::Valid(ret)) => ret < dep,
            _ => false,
        };

        Self {
            departure_before_today,
            return_before_departure,
            missing,
            malformed,
        }
    }

    pub fn has_temporal_error(&self) -> bool {
        self.departure_before_today || self.return_before_departure
    }

    pub fn has_input_error(&self) -> bool {
        !self.missing.is_empty() || !self.malformed.is_empty()
    }

    /// Whether a submission would send a request
    pub fn can_submit(&self) -> bool {
        !self.has_temporal_error() && !self.has_input_error()
    }

    /// Inline error message to show under a field, if any.
    ///
    /// Temporal errors take priority over input errors on the same field.
    pub fn field_error(&self, field: TripField) -> Option<&'static str> {
        match field {
            TripField::DepartureDate if self.departure_before_today => {
                return Some(messages::DEPARTURE_IN_PAST);
            }
            TripField::ReturnDate if self.return_before_departure => {
                return Some(messages::RETURN_BEFORE_DEPARTURE);
            }
            _ => {}
        }

        if self.missing.contains(&field) {
            Some(messages::REQUIRED_FIELD)
        } else if self.malformed.contains(&field) {
            Some(messages::INVALID_DATE)
        } else {
            None
        }
    }

    /// Summary line describing why the form cannot be submitted
    pub fn summary(&self) -> Option<&'static str> {
        if self.has_temporal_error() {
            Some(messages::FIX_DATES)
        } else if self.has_input_error() {
            Some(messages::COMPLETE_FORM)
        } else {
            None
        }
    }
}

enum DateInput {
    Empty,
    Valid(NaiveDate),
    Malformed,
}

fn date_field(state: &FormState, field: TripField) -> DateInput {
    let raw = state.get(field);
    if raw.is_empty() {
        return DateInput::Empty;
    }
    match parse_iso_date(raw) {
        Some(date) => DateInput::Valid(date),
        None => DateInput::Malformed,
    }
}
