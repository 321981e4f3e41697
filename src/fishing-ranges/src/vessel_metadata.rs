use crate::{
    Result, VesselMetadataRow,
    error::error::{AttributeSnafu, CsvSnafu},
};
use localisation_core::{VesselAttributes, VesselId, VesselMetadata, taxonomy};
use snafu::{ResultExt, ensure};
use std::io::Read;
use tracing::{info, warn};

/// Reads labels, splits and attributes of the vessels in `split`. Numeric
/// attributes that are present must be strictly positive numbers.
pub fn read_vessel_metadata<R: Read>(reader: R, split: &str) -> Result<VesselMetadata> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut metadata = VesselMetadata::default();

    for row in csv_reader.deserialize::<VesselMetadataRow>() {
        let row = row.context(CsvSnafu)?;
        if row.split != split {
            continue;
        }

        let vessel_id = VesselId::new(&row.mmsi);

        if !row.label.is_empty() {
            if !taxonomy().is_known(&row.label) {
                warn!("vessel {vessel_id} has label '{}' outside of the taxonomy", row.label);
            }
            metadata.labels.insert(vessel_id.clone(), row.label.clone());
        }

        let attributes = VesselAttributes {
            length: attribute(&vessel_id, "length", &row.length)?,
            tonnage: attribute(&vessel_id, "tonnage", &row.tonnage)?,
            engine_power: attribute(&vessel_id, "engine_power", &row.engine_power)?,
            crew_size: attribute(&vessel_id, "crew_size", &row.crew_size)?,
        };

        metadata.attributes.insert(vessel_id.clone(), attributes);
        metadata.splits.insert(vessel_id, row.split);
    }

    info!(
        "read metadata of {} vessels in split '{split}', {} labeled",
        metadata.splits.len(),
        metadata.labels.len()
    );

    Ok(metadata)
}

fn attribute(vessel_id: &VesselId, field: &'static str, value: &str) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }

    let parsed = value.parse::<f64>().ok().filter(|v| *v > 0.0);

    ensure!(
        parsed.is_some(),
        AttributeSnafu {
            vessel_id: vessel_id.as_str(),
            field,
            value,
        }
    );

    Ok(parsed)
}
