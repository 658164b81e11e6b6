use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One of the four inputs of the trip request form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripField {
    Origin,
    Destination,
    DepartureDate,
    ReturnDate,
}

impl TripField {
    /// All fields in display order
    pub const ALL: [TripField; 4] = [
        TripField::Origin,
        TripField::Destination,
        TripField::DepartureDate,
        TripField::ReturnDate,
    ];

    /// Canonical snake_case name, matching the wire payload keys
    pub fn as_str(&self) -> &'static str {
        match self {
            TripField::Origin => "origin",
            TripField::Destination => "destination",
            TripField::DepartureDate => "departure_date",
            TripField::ReturnDate => "return_date",
        }
    }

    /// Short label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            TripField::Origin => "From",
            TripField::Destination => "To",
            TripField::DepartureDate => "Departure",
            TripField::ReturnDate => "Return",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            TripField::Origin => "City or airport",
            TripField::Destination => "Destination city",
            TripField::DepartureDate | TripField::ReturnDate => "YYYY-MM-DD",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, TripField::ReturnDate)
    }

    pub fn is_date(&self) -> bool {
        matches!(self, TripField::DepartureDate | TripField::ReturnDate)
    }
}

impl fmt::Display for TripField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TripField {
    type Err = Error;

    /// Accepts canonical names, short names and the camelCase names used by web form markup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "origin" | "from" => Ok(TripField::Origin),
            "destination" | "to" => Ok(TripField::Destination),
            "departure" | "departure_date" | "departureDate" => Ok(TripField::DepartureDate),
            "return" | "return_date" | "returnDate" => Ok(TripField::ReturnDate),
            other => Err(Error::UnknownField(other.to_string())),
        }
    }
}

/// Current values of the trip request form.
///
/// Every value is kept exactly as entered. An empty string means the field is unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
}

impl FormState {
    /// Builder-style field assignment
    pub fn with(mut self, field: TripField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: TripField) -> &str {
        match field {
            TripField::Origin => &self.origin,
            TripField::Destination => &self.destination,
            TripField::DepartureDate => &self.departure_date,
            TripField::ReturnDate => &self.return_date,
        }
    }

    /// Replace one field, leaving the others untouched
    pub fn set(&mut self, field: TripField, value: impl Into<String>) {
        let slot = match field {
            TripField::Origin => &mut self.origin,
            TripField::Destination => &mut self.destination,
            TripField::DepartureDate => &mut self.departure_date,
            TripField::ReturnDate => &mut self.return_date,
        };
        *slot = value.into();
    }

    pub fn is_set(&self, field: TripField) -> bool {
        !self.get(field).is_empty()
    }
}
