use crate::FishingRange;
use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

#[repr(i8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MinuteLabel {
    Unknown = -1,
    NotFishing = 0,
    Fishing = 1,
}

/// Resolves minutes covered by more than one range of the same column.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// The range applied last, in source order, decides the minute.
    #[default]
    LastWriteWins,
    FishingWins,
    NotFishingWins,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RasterSettings {
    pub overlap_policy: OverlapPolicy,
    pub score_threshold: f64,
}

/// Dense per-minute labels of a single vessel spanning the extent of its true
/// ranges. Index 0 is `start_minute`.
#[derive(Debug, Clone, PartialEq)]
pub struct MinuteGrid {
    start_minute: i64,
    truth: Vec<MinuteLabel>,
    inferred: Vec<MinuteLabel>,
}

impl MinuteLabel {
    pub fn from_fishing(is_fishing: bool) -> Self {
        if is_fishing {
            Self::Fishing
        } else {
            Self::NotFishing
        }
    }

    pub fn is_known(&self) -> bool {
        *self != Self::Unknown
    }

    pub fn is_fishing(&self) -> bool {
        *self == Self::Fishing
    }
}

impl From<MinuteLabel> for i8 {
    fn from(value: MinuteLabel) -> Self {
        value as i8
    }
}

impl OverlapPolicy {
    fn resolve(&self, current: MinuteLabel, new: MinuteLabel) -> MinuteLabel {
        match (self, current) {
            (_, MinuteLabel::Unknown) | (OverlapPolicy::LastWriteWins, _) => new,
            (OverlapPolicy::FishingWins, MinuteLabel::Fishing) => current,
            (OverlapPolicy::NotFishingWins, MinuteLabel::NotFishing) => current,
            (OverlapPolicy::FishingWins, _) | (OverlapPolicy::NotFishingWins, _) => new,
        }
    }
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            overlap_policy: OverlapPolicy::default(),
            score_threshold: crate::DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl MinuteGrid {
    /// Rasterizes the ranges of one vessel. The extent is determined by the
    /// true ranges only, inferred minutes outside of it are dropped. Returns
    /// `None` if there are no true ranges.
    pub fn build(
        truth: &[FishingRange],
        inferred: &[FishingRange],
        settings: &RasterSettings,
    ) -> Option<Self> {
        let start_minute = truth.iter().map(|r| r.start_minute()).min()?;
        let end_minute = truth.iter().map(|r| r.end_minute()).max()?;

        let len = (end_minute - start_minute + 1) as usize;

        let mut grid = Self {
            start_minute,
            truth: vec![MinuteLabel::Unknown; len],
            inferred: vec![MinuteLabel::Unknown; len],
        };

        for r in truth {
            fill(&mut grid.truth, start_minute, r, settings);
        }
        for r in inferred {
            fill(&mut grid.inferred, start_minute, r, settings);
        }

        Some(grid)
    }

    pub fn start_minute(&self) -> i64 {
        self.start_minute
    }

    pub fn len(&self) -> usize {
        self.truth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.truth.is_empty()
    }

    pub fn truth(&self) -> &[MinuteLabel] {
        &self.truth
    }

    pub fn inferred(&self) -> &[MinuteLabel] {
        &self.inferred
    }

    #[cfg(any(test, feature = "test"))]
    pub fn from_columns(truth: Vec<MinuteLabel>, inferred: Vec<MinuteLabel>) -> Self {
        assert_eq!(truth.len(), inferred.len());
        Self {
            start_minute: 0,
            truth,
            inferred,
        }
    }
}

// Minutes outside of the column are skipped, which clips inferred ranges to the
// true extent. True ranges always lie within it.
fn fill(column: &mut [MinuteLabel], start_minute: i64, range: &FishingRange, settings: &RasterSettings) {
    let len = column.len() as i64;
    let first = (range.start_minute() - start_minute).max(0);
    let last = (range.end_minute() - start_minute).min(len - 1);
    if first > last {
        return;
    }

    let label = MinuteLabel::from_fishing(range.value().is_fishing(settings.score_threshold));

    for cell in &mut column[first as usize..=last as usize] {
        *cell = settings.overlap_policy.resolve(*cell, label);
    }
}
