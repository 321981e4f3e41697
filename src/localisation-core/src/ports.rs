use crate::*;
use async_trait::async_trait;
use std::collections::BTreeSet;

#[async_trait]
pub trait VesselMetadataOutbound: Send + Sync {
    /// Labels, splits and attributes of the vessels assigned to `split`.
    async fn vessel_metadata(&self, split: &str) -> CoreResult<VesselMetadata>;
}

#[async_trait]
pub trait TrueRangesOutbound: Send + Sync {
    /// Ground truth ranges of the vessels that `splits` assigns to `split`.
    async fn true_ranges(&self, splits: &SplitMap, split: &str) -> CoreResult<VesselRangeSet>;
}

#[async_trait]
pub trait InferredRangesOutbound: Send + Sync {
    async fn inferred_ranges(&self, vessels: &BTreeSet<VesselId>) -> CoreResult<VesselRangeSet>;
}

#[async_trait]
pub trait ReportInbound: Send + Sync {
    async fn write_report(&self, report: &LocalisationReport) -> CoreResult<()>;
}
