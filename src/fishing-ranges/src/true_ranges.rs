use crate::{
    Result, TrueRangeRow,
    error::error::{CsvSnafu, FishingValueSnafu, RangeSnafu},
    parse_timestamp,
};
use localisation_core::{FishingRange, FishingValue, SplitMap, VesselId, VesselRangeSet};
use snafu::ResultExt;
use std::io::Read;
use tracing::info;

/// Reads ground truth ranges, keeping only vessels that `splits` assigns to
/// `split`. A numeric `is_fishing` becomes a flag in threshold mode and is kept
/// as a score otherwise. Any unparseable value aborts the read.
pub fn read_true_ranges<R: Read>(
    reader: R,
    splits: &SplitMap,
    split: &str,
    threshold: bool,
) -> Result<VesselRangeSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ranges = VesselRangeSet::new();
    let mut num_rows = 0;

    for row in csv_reader.deserialize::<TrueRangeRow>() {
        let row = row.context(CsvSnafu)?;
        let vessel_id = VesselId::new(&row.mmsi);

        if splits.get(&vessel_id).map(|s| s.as_str()) != Some(split) {
            continue;
        }

        let value = row.is_fishing.parse::<f64>().context(FishingValueSnafu {
            vessel_id: vessel_id.as_str(),
            value: &row.is_fishing,
        })?;

        let range = FishingRange::new(
            &vessel_id,
            FishingValue::from_raw(value, threshold),
            parse_timestamp(&row.start_time)?,
            parse_timestamp(&row.end_time)?,
        )
        .context(RangeSnafu)?;

        ranges.entry(vessel_id).or_default().push(range);
        num_rows += 1;
    }

    info!(
        "read {num_rows} true ranges of {} vessels in split '{split}'",
        ranges.len()
    );

    Ok(ranges)
}
