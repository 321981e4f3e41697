use crate::{
    InferredRangeRow, InferredValue, Result,
    error::error::{CsvSnafu, JsonSnafu, RangeSnafu},
    parse_timestamp,
};
use flate2::read::GzDecoder;
use localisation_core::{FishingRange, FishingValue, VesselId, VesselRangeSet};
use snafu::ResultExt;
use std::collections::BTreeSet;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InferredFormat {
    Csv,
    /// One JSON object per line.
    Ndjson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferredSource {
    pub format: InferredFormat,
    pub gzip: bool,
}

impl InferredSource {
    /// Determined from the file extension, `.gz` marks gzip compression of
    /// the inner format. Anything that is not json is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|v| v.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let (name, gzip) = match name.strip_suffix(".gz") {
            Some(v) => (v.to_string(), true),
            None => (name, false),
        };

        let format = if [".json", ".jsonl", ".ndjson"]
            .iter()
            .any(|ext| name.ends_with(ext))
        {
            InferredFormat::Ndjson
        } else {
            InferredFormat::Csv
        };

        Self { format, gzip }
    }
}

/// Reads inferred ranges of the given vessels from `reader`, decompressing and
/// decoding it as described by `source`.
pub fn read_inferred_ranges<R: Read>(
    reader: R,
    source: InferredSource,
    vessels: &BTreeSet<VesselId>,
    threshold: bool,
) -> Result<VesselRangeSet> {
    let ranges = if source.gzip {
        read_format(GzDecoder::new(reader), source.format, vessels, threshold)
    } else {
        read_format(reader, source.format, vessels, threshold)
    }?;

    info!(
        "read inferred ranges of {} vessels: {:?}",
        ranges.len(),
        ranges
            .iter()
            .map(|(k, v)| (k.as_str(), v.len()))
            .collect::<Vec<_>>()
    );

    Ok(ranges)
}

fn read_format<R: Read>(
    reader: R,
    format: InferredFormat,
    vessels: &BTreeSet<VesselId>,
    threshold: bool,
) -> Result<VesselRangeSet> {
    match format {
        InferredFormat::Csv => read_csv(reader, vessels, threshold),
        InferredFormat::Ndjson => read_ndjson(BufReader::new(reader), vessels, threshold),
    }
}

fn read_csv<R: Read>(
    reader: R,
    vessels: &BTreeSet<VesselId>,
    threshold: bool,
) -> Result<VesselRangeSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ranges = VesselRangeSet::new();
    for row in csv_reader.deserialize::<InferredRangeRow>() {
        add_row(&mut ranges, row.context(CsvSnafu)?, vessels, threshold)?;
    }
    Ok(ranges)
}

fn read_ndjson<R: BufRead>(
    reader: R,
    vessels: &BTreeSet<VesselId>,
    threshold: bool,
) -> Result<VesselRangeSet> {
    let mut ranges = VesselRangeSet::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(serde_json::Error::io).context(JsonSnafu { line: i + 1 })?;
        if line.trim().is_empty() {
            continue;
        }
        let row = serde_json::from_str::<InferredRangeRow>(&line)
            .context(JsonSnafu { line: i + 1 })?;
        add_row(&mut ranges, row, vessels, threshold)?;
    }
    Ok(ranges)
}

fn add_row(
    ranges: &mut VesselRangeSet,
    row: InferredRangeRow,
    vessels: &BTreeSet<VesselId>,
    threshold: bool,
) -> Result<()> {
    let vessel_id = VesselId::new(&row.vessel_id);
    if !vessels.contains(&vessel_id) {
        return Ok(());
    }

    let range = FishingRange::new(
        &vessel_id,
        match row.nnet_score {
            InferredValue::Flag(v) => FishingValue::Flag(v),
            InferredValue::Score(v) => FishingValue::from_raw(v, threshold),
        },
        parse_timestamp(&row.start_time)?,
        parse_timestamp(&row.end_time)?,
    )
    .context(RangeSnafu)?;

    ranges.entry(vessel_id).or_default().push(range);
    Ok(())
}
