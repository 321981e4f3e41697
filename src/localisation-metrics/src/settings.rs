use crate::report::ReportFormat;
use clap::Parser;
use config::{Config, ConfigError, File};
use fishing_ranges::FileAdapterSettings;
use localisation_core::{LocalisationSettings, OverlapPolicy, RasterSettings};
use serde::Deserialize;
use std::path::PathBuf;
use strum::{AsRefStr, Display};

pub const ENV_PREFIX: &str = "LOCALISATION";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Scores inferred fishing ranges against labeled ground truth ranges",
    long_about = None
)]
pub struct Args {
    /// Inferred fishing ranges, csv or newline delimited json, optionally gzipped.
    #[arg(long)]
    pub inference_path: PathBuf,

    /// Vessel metadata with labels and splits.
    #[arg(long)]
    pub label_path: PathBuf,

    /// Ground truth fishing ranges.
    #[arg(long)]
    pub fishing_ranges: PathBuf,

    /// Destination of the rendered report.
    #[arg(long)]
    pub dest_path: PathBuf,

    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, AsRefStr, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub log_level: LogLevel,
    pub test_split: String,
    pub threshold: bool,
    pub score_threshold: f64,
    pub overlap_policy: OverlapPolicy,
    pub report_format: ReportFormat,
    pub inference_path: PathBuf,
    pub label_path: PathBuf,
    pub fishing_ranges: PathBuf,
    pub dest_path: PathBuf,
}

impl Settings {
    /// Layers defaults, an optional config file, `LOCALISATION__*` environment
    /// variables and finally the command line arguments.
    pub fn new(args: &Args) -> Result<Self, ConfigError> {
        let mut builder = defaults()?;

        if let Some(path) = &args.config {
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }

        builder = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .set_override("inference_path", path_value(&args.inference_path))?
            .set_override("label_path", path_value(&args.label_path))?
            .set_override("fishing_ranges", path_value(&args.fishing_ranges))?
            .set_override("dest_path", path_value(&args.dest_path))?;

        if let Some(format) = args.format {
            builder = builder.set_override("report_format", format.as_ref())?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn adapter_settings(&self) -> FileAdapterSettings {
        FileAdapterSettings {
            fishing_ranges: self.fishing_ranges.clone(),
            inference_path: self.inference_path.clone(),
            label_path: self.label_path.clone(),
            threshold: self.threshold,
        }
    }

    pub fn localisation_settings(&self) -> LocalisationSettings {
        LocalisationSettings {
            test_split: self.test_split.clone(),
            raster: RasterSettings {
                overlap_policy: self.overlap_policy,
                score_threshold: self.score_threshold,
            },
        }
    }
}

pub fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Config::builder()
        .set_default("log_level", LogLevel::default().as_ref())?
        .set_default("test_split", "Test")?
        .set_default("threshold", true)?
        .set_default("score_threshold", localisation_core::DEFAULT_SCORE_THRESHOLD)?
        .set_default("overlap_policy", OverlapPolicy::default().as_ref())?
        .set_default("report_format", ReportFormat::default().as_ref())
}

fn path_value(path: &std::path::Path) -> String {
    path.to_string_lossy().into_owned()
}
