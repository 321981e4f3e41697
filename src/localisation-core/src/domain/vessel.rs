use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// Maritime Mobile Service Identity, used as the join key across all inputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VesselId(String);

/// Vessel id to gear type label.
pub type LabelMap = BTreeMap<VesselId, String>;

/// Vessel id to the name of the split the vessel belongs to.
pub type SplitMap = BTreeMap<VesselId, String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselMetadata {
    pub labels: LabelMap,
    pub splits: SplitMap,
    pub attributes: BTreeMap<VesselId, VesselAttributes>,
}

/// Numeric vessel characteristics, all strictly positive when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VesselAttributes {
    pub length: Option<f64>,
    pub tonnage: Option<f64>,
    pub engine_power: Option<f64>,
    pub crew_size: Option<f64>,
}

impl VesselId {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VesselId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VesselId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl VesselMetadata {
    /// Ids of all vessels assigned to the given split.
    pub fn vessels_in_split(&self, split: &str) -> Vec<VesselId> {
        self.splits
            .iter()
            .filter(|(_, s)| s.as_str() == split)
            .map(|(id, _)| id.clone())
            .collect()
    }
}
