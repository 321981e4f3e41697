use snafu::{Location, Snafu};
use std::num::ParseFloatError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to read file '{}'", path.display()))]
    Io {
        #[snafu(implicit)]
        location: Location,
        path: PathBuf,
        #[snafu(source)]
        error: std::io::Error,
    },
    #[snafu(display("CSV error"))]
    Csv {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: csv::Error,
    },
    #[snafu(display("Failed to decode json on line '{line}'"))]
    Json {
        #[snafu(implicit)]
        location: Location,
        line: usize,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display("Could not parse timestamp '{value}'"))]
    Timestamp {
        #[snafu(implicit)]
        location: Location,
        value: String,
        #[snafu(source)]
        error: chrono::ParseError,
    },
    #[snafu(display("Could not parse fishing value '{value}' of vessel '{vessel_id}'"))]
    FishingValue {
        #[snafu(implicit)]
        location: Location,
        vessel_id: String,
        value: String,
        #[snafu(source)]
        error: ParseFloatError,
    },
    #[snafu(display(
        "Vessel '{vessel_id}' has invalid '{field}' value '{value}', expected a positive number"
    ))]
    Attribute {
        #[snafu(implicit)]
        location: Location,
        vessel_id: String,
        field: &'static str,
        value: String,
    },
    #[snafu(display("Invalid fishing range"))]
    Range {
        #[snafu(implicit)]
        location: Location,
        source: localisation_core::Error,
    },
}

impl From<Error> for localisation_core::Error {
    #[track_caller]
    fn from(value: Error) -> Self {
        let location = std::panic::Location::caller();
        let location = snafu::Location::new(location.file(), location.line(), location.column());
        localisation_core::Error::Unexpected {
            location,
            source: Box::new(value),
        }
    }
}
