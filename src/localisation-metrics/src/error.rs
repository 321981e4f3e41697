use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Failed to compute localisation metrics"))]
    Localisation {
        #[snafu(implicit)]
        location: Location,
        source: localisation_core::Error,
    },
    #[snafu(display("Failed to render report"))]
    Render {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: std::fmt::Error,
    },
    #[snafu(display("Failed to serialize report"))]
    Json {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display("Failed to write report to '{path}'"))]
    Write {
        #[snafu(implicit)]
        location: Location,
        path: String,
        #[snafu(source)]
        error: std::io::Error,
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
