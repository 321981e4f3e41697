#![deny(warnings)]
#![deny(rust_2018_idioms)]

use config::{Config, File};
use localisation_metrics::settings::Settings;

pub mod app;
pub mod helper;

#[test]
fn test_local_settings_are_valid() {
    Config::builder()
        .add_source(File::with_name("config/local.yml").required(true))
        .set_override("inference_path", "inferred.csv")
        .unwrap()
        .set_override("label_path", "labels.csv")
        .unwrap()
        .set_override("fishing_ranges", "fishing_ranges.csv")
        .unwrap()
        .set_override("dest_path", "report.html")
        .unwrap()
        .build()
        .unwrap()
        .try_deserialize::<Settings>()
        .unwrap();
}
