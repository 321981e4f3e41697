#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a binary that scores inferred fishing ranges against ground truth
//! ranges minute by minute and writes a localisation report.

pub mod error;
pub mod report;
pub mod settings;
pub mod startup;
