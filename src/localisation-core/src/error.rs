use chrono::{DateTime, Utc};
use snafu::{Location, Snafu};

pub type CoreResult<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Range of vessel '{vessel_id}' ends before it starts, start: '{start}', end: '{end}'"))]
    RangeOrdering {
        #[snafu(implicit)]
        location: Location,
        vessel_id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
    #[snafu(display(
        "Weights must match the number of labels, labels: '{labels}', weights: '{weights}'"
    ))]
    WeightsLength {
        #[snafu(implicit)]
        location: Location,
        labels: usize,
        weights: usize,
    },
    #[snafu(display("Label sequences differ in length, truth: '{truth}', predicted: '{predicted}'"))]
    LabelsLength {
        #[snafu(implicit)]
        location: Location,
        truth: usize,
        predicted: usize,
    },
    #[snafu(display("Unexpected error"))]
    Unexpected {
        #[snafu(implicit)]
        location: Location,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
