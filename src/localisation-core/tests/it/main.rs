#![deny(warnings)]
#![deny(rust_2018_idioms)]

pub mod localisation;
