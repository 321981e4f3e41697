#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Domain types and algorithms for scoring per-minute fishing localisation
//! against labeled ground-truth ranges.

mod domain;
mod error;
mod localisation;
mod ports;

#[cfg(any(test, feature = "test"))]
pub mod test_helper;

pub use domain::*;
pub use error::{CoreResult, Error};
pub use localisation::*;
pub use ports::*;
