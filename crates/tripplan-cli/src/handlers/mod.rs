pub mod check;
pub mod config;
pub mod interactive;
pub mod plan;

use crate::args::TripFieldArgs;
use crate::context::CliClock;
use tripplan_runtime::TripRequestForm;

/// Apply the field flags to a fresh form, one edit per flag
pub(crate) fn apply_fields(form: &mut TripRequestForm<CliClock>, fields: &TripFieldArgs) {
    for (field, value) in fields.edits() {
        form.set_field(field, value);
    }
}
