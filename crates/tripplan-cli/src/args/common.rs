use clap::Args;
use tripplan_types::TripField;

/// The four inputs of the trip request form
#[derive(Debug, Clone, Default, Args)]
pub struct TripFieldArgs {
    #[arg(long, visible_alias = "from", help = "City or airport to leave from")]
    pub origin: Option<String>,

    #[arg(long, visible_alias = "to", help = "Destination city")]
    pub destination: Option<String>,

    #[arg(
        long = "departure",
        visible_alias = "departure-date",
        value_name = "YYYY-MM-DD",
        help = "Departure date"
    )]
    pub departure_date: Option<String>,

    #[arg(
        long = "return",
        visible_alias = "return-date",
        value_name = "YYYY-MM-DD",
        help = "Return date (optional)"
    )]
    pub return_date: Option<String>,
}

impl TripFieldArgs {
    /// Field edits in form order, for the flags that were given
    pub fn edits(&self) -> Vec<(TripField, &str)> {
        [
            (TripField::Origin, &self.origin),
            (TripField::Destination, &self.destination),
            (TripField::DepartureDate, &self.departure_date),
            (TripField::ReturnDate, &self.return_date),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}
