use serde::Deserialize;

/// Row of the ground truth fishing range file.
#[derive(Debug, Clone, Deserialize)]
pub struct TrueRangeRow {
    pub mmsi: String,
    pub is_fishing: String,
    pub start_time: String,
    pub end_time: String,
}

/// Row of an inferred range source, either a CSV row or a JSON object.
#[derive(Debug, Clone, Deserialize)]
pub struct InferredRangeRow {
    pub vessel_id: String,
    pub start_time: String,
    pub end_time: String,
    pub nnet_score: InferredValue,
}

/// Inferred fishing state, either already decided or a network score.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InferredValue {
    Flag(bool),
    Score(f64),
}

/// Row of the vessel metadata file. Numeric attributes are optional columns
/// and kept as text until validated.
#[derive(Debug, Clone, Deserialize)]
pub struct VesselMetadataRow {
    pub mmsi: String,
    #[serde(default)]
    pub label: String,
    pub split: String,
    #[serde(default)]
    pub length: String,
    #[serde(default)]
    pub tonnage: String,
    #[serde(default)]
    pub engine_power: String,
    #[serde(default)]
    pub crew_size: String,
}
