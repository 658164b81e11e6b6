//! Runtime layer for tripplan.
//!
//! Owns the [`TripRequestForm`] controller and everything it talks to: the
//! [`Clock`] that decides what "today" is, the [`PlanningService`] the form
//! submits to, and the [`Config`] that says where that service lives.
//!
//! ```no_run
//! use tripplan_runtime::{HttpPlanningClient, SubmitOutcome, TripRequestForm};
//! use tripplan_types::TripField;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpPlanningClient::new("http://localhost:8000")?;
//! let mut form = TripRequestForm::new();
//! form.set_field(TripField::Origin, "New York");
//! form.set_field(TripField::Destination, "London");
//! form.set_field(TripField::DepartureDate, "2030-11-22");
//!
//! if let SubmitOutcome::Planned(response) = form.submit(&client).await {
//!     println!("{}", response.as_json());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod feedback;
pub mod form;

pub use client::{DeferredPlanningClient, HttpPlanningClient, PlanError, PlanningService};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ApiUrlSource, Config, ResolvedApiUrl};
pub use error::{Error, Result};
pub use feedback::{FieldFeedback, FormFeedback, HelperKind, HelperLine};
pub use form::{SubmitOutcome, TripRequestForm};
