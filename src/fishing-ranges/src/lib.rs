#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Reads ground truth fishing ranges, inferred fishing ranges and vessel
//! metadata from files.

mod adapter;
mod error;
mod inferred;
mod models;
mod timestamp;
mod true_ranges;
mod vessel_metadata;

pub use adapter::*;
pub use error::{Error, Result};
pub use inferred::*;
pub use models::*;
pub use timestamp::*;
pub use true_ranges::*;
pub use vessel_metadata::*;
