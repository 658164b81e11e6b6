use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::{FormState, TripField};
use crate::validation::parse_iso_date;
use crate::{Error, Result};

/// Body of `POST /plan-trip`.
///
/// `return_date` is always serialized; an absent return date is an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequestPayload {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

impl TryFrom<&FormState> for TripRequestPayload {
    type Error = Error;

    fn try_from(state: &FormState) -> Result<Self> {
        let required = |field: TripField| -> Result<String> {
            let value = state.get(field);
            if value.is_empty() {
                return Err(Error::MissingField(field.as_str()));
            }
            Ok(value.to_string())
        };

        let departure_date = parse_date(TripField::DepartureDate, &required(TripField::DepartureDate)?)?;
        let return_date = match state.get(TripField::ReturnDate) {
            "" => None,
            raw => Some(parse_date(TripField::ReturnDate, raw)?),
        };

        Ok(Self {
            origin: required(TripField::Origin)?,
            destination: required(TripField::Destination)?,
            departure_date,
            return_date,
        })
    }
}

fn parse_date(field: TripField, raw: &str) -> Result<NaiveDate> {
    parse_iso_date(raw).ok_or_else(|| Error::InvalidDate {
        field: field.as_str(),
        value: raw.to_string(),
    })
}

/// JSON returned by the planning service on success.
///
/// The schema belongs to the service, so the body is kept as-is; [`PlanResponse::itinerary`]
/// offers a typed view when the body has the usual `itinerary` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanResponse(Value);

impl PlanResponse {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    /// Day-by-day itinerary, if the body carries one
    pub fn itinerary(&self) -> Option<Vec<ItineraryDay>> {
        let days = self.0.get("itinerary")?;
        serde_json::from_value(days.clone()).ok()
    }
}

/// One entry of an itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub summary: String,
}
