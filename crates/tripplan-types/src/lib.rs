pub mod error;
pub mod form;
pub mod messages;
pub mod request;
pub mod validation;

pub use error::{Error, Result};
pub use form::{FormState, TripField};
pub use request::{ItineraryDay, PlanResponse, TripRequestPayload};
pub use validation::{FormValidation, parse_iso_date};
