use crate::{CoreResult, VesselId, error::error::RangeOrderingSnafu};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Ranges per vessel, either ground truth or inferred. Ranges of a vessel keep
/// their source order and may overlap.
pub type VesselRangeSet = BTreeMap<VesselId, Vec<FishingRange>>;

/// Scores strictly above this value are considered fishing.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FishingValue {
    Flag(bool),
    Score(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FishingRange {
    value: FishingValue,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl FishingValue {
    /// Converts a raw value into either a flag or a retained score depending on
    /// whether threshold mode is enabled.
    pub fn from_raw(value: f64, threshold: bool) -> Self {
        if threshold {
            Self::Flag(value > DEFAULT_SCORE_THRESHOLD)
        } else {
            Self::Score(value)
        }
    }

    pub fn is_fishing(&self, score_threshold: f64) -> bool {
        match *self {
            Self::Flag(v) => v,
            Self::Score(v) => v > score_threshold,
        }
    }
}

impl FishingRange {
    /// Both `start` and `end` are inclusive.
    pub fn new(
        vessel_id: &VesselId,
        value: FishingValue,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if start > end {
            RangeOrderingSnafu {
                vessel_id: vessel_id.as_str(),
                start,
                end,
            }
            .fail()
        } else {
            Ok(Self { value, start, end })
        }
    }

    pub fn value(&self) -> FishingValue {
        self.value
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn start_minute(&self) -> i64 {
        minute_index(self.start)
    }

    pub fn end_minute(&self) -> i64 {
        minute_index(self.end)
    }
}

/// Whole minutes since the unix epoch, rounded towards negative infinity.
pub fn minute_index(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp().div_euclid(60)
}
