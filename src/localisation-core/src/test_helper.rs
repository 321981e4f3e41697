use crate::*;
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::BTreeSet;
use std::sync::Mutex;

/// Timestamp that minute offsets in the helpers are relative to.
pub fn test_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()
}

pub fn minutes(offset: i64) -> DateTime<Utc> {
    test_epoch() + Duration::minutes(offset)
}

pub fn fishing(start: i64, end: i64) -> FishingRange {
    flag(true, start, end)
}

pub fn not_fishing(start: i64, end: i64) -> FishingRange {
    flag(false, start, end)
}

pub fn flag(is_fishing: bool, start: i64, end: i64) -> FishingRange {
    FishingRange::new(
        &VesselId::from("test"),
        FishingValue::Flag(is_fishing),
        minutes(start),
        minutes(end),
    )
    .unwrap()
}

pub fn range_set<const N: usize>(items: [(&str, Vec<FishingRange>); N]) -> VesselRangeSet {
    items
        .into_iter()
        .map(|(id, ranges)| (VesselId::from(id), ranges))
        .collect()
}

pub fn label_map<const N: usize>(items: [(&str, &str); N]) -> LabelMap {
    items
        .into_iter()
        .map(|(id, label)| (VesselId::from(id), label.to_string()))
        .collect()
}

/// Serves every port from memory and keeps the last written report.
#[derive(Debug, Default)]
pub struct InMemoryAdapter {
    pub metadata: VesselMetadata,
    pub true_ranges: VesselRangeSet,
    pub inferred_ranges: VesselRangeSet,
    pub report: Mutex<Option<LocalisationReport>>,
}

impl InMemoryAdapter {
    pub fn vessel(mut self, id: &str, label: &str, split: &str) -> Self {
        let id = VesselId::from(id);
        if split == "Test" {
            self.metadata.labels.insert(id.clone(), label.to_string());
        }
        self.metadata.splits.insert(id, split.to_string());
        self
    }

    pub fn true_range(mut self, id: &str, range: FishingRange) -> Self {
        self.true_ranges.entry(id.into()).or_default().push(range);
        self
    }

    pub fn inferred_range(mut self, id: &str, range: FishingRange) -> Self {
        self.inferred_ranges.entry(id.into()).or_default().push(range);
        self
    }

    pub fn written_report(&self) -> Option<LocalisationReport> {
        self.report.lock().unwrap().clone()
    }
}

#[async_trait]
impl VesselMetadataOutbound for InMemoryAdapter {
    async fn vessel_metadata(&self, split: &str) -> CoreResult<VesselMetadata> {
        let in_split = |id: &VesselId| self.metadata.splits.get(id).map(|s| s.as_str()) == Some(split);

        Ok(VesselMetadata {
            labels: self
                .metadata
                .labels
                .iter()
                .filter(|(id, _)| in_split(*id))
                .map(|(id, l)| (id.clone(), l.clone()))
                .collect(),
            splits: self
                .metadata
                .splits
                .iter()
                .filter(|(id, _)| in_split(*id))
                .map(|(id, s)| (id.clone(), s.clone()))
                .collect(),
            attributes: self.metadata.attributes.clone(),
        })
    }
}

#[async_trait]
impl TrueRangesOutbound for InMemoryAdapter {
    async fn true_ranges(&self, splits: &SplitMap, split: &str) -> CoreResult<VesselRangeSet> {
        Ok(self
            .true_ranges
            .iter()
            .filter(|(id, _)| splits.get(*id).map(|s| s.as_str()) == Some(split))
            .map(|(id, r)| (id.clone(), r.clone()))
            .collect())
    }
}

#[async_trait]
impl InferredRangesOutbound for InMemoryAdapter {
    async fn inferred_ranges(&self, vessels: &BTreeSet<VesselId>) -> CoreResult<VesselRangeSet> {
        Ok(self
            .inferred_ranges
            .iter()
            .filter(|(id, _)| vessels.contains(*id))
            .map(|(id, r)| (id.clone(), r.clone()))
            .collect())
    }
}

#[async_trait]
impl ReportInbound for InMemoryAdapter {
    async fn write_report(&self, report: &LocalisationReport) -> CoreResult<()> {
        *self.report.lock().unwrap() = Some(report.clone());
        Ok(())
    }
}
