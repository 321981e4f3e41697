use crate::{
    InferredSource, Result, error::error::IoSnafu, read_inferred_ranges, read_true_ranges,
    read_vessel_metadata,
};
use async_trait::async_trait;
use localisation_core::{
    CoreResult, InferredRangesOutbound, SplitMap, TrueRangesOutbound, VesselId, VesselMetadata,
    VesselMetadataOutbound, VesselRangeSet,
};
use snafu::ResultExt;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::instrument;

#[derive(Debug, Clone)]
pub struct FileAdapterSettings {
    pub fishing_ranges: PathBuf,
    pub inference_path: PathBuf,
    pub label_path: PathBuf,
    /// Threshold numeric fishing values into flags instead of keeping scores.
    pub threshold: bool,
}

/// Serves vessel metadata, ground truth ranges and inferred ranges from files.
#[derive(Debug, Clone)]
pub struct FileAdapter {
    settings: FileAdapterSettings,
}

impl FileAdapter {
    pub fn new(settings: FileAdapterSettings) -> Self {
        Self { settings }
    }
}

async fn read_file(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.context(IoSnafu { path })
}

#[async_trait]
impl VesselMetadataOutbound for FileAdapter {
    #[instrument(skip_all)]
    async fn vessel_metadata(&self, split: &str) -> CoreResult<VesselMetadata> {
        let data = read_file(&self.settings.label_path).await?;
        Ok(read_vessel_metadata(data.as_slice(), split)?)
    }
}

#[async_trait]
impl TrueRangesOutbound for FileAdapter {
    #[instrument(skip_all)]
    async fn true_ranges(&self, splits: &SplitMap, split: &str) -> CoreResult<VesselRangeSet> {
        let data = read_file(&self.settings.fishing_ranges).await?;
        Ok(read_true_ranges(
            data.as_slice(),
            splits,
            split,
            self.settings.threshold,
        )?)
    }
}

#[async_trait]
impl InferredRangesOutbound for FileAdapter {
    #[instrument(skip_all)]
    async fn inferred_ranges(&self, vessels: &BTreeSet<VesselId>) -> CoreResult<VesselRangeSet> {
        let path = &self.settings.inference_path;
        let data = read_file(path).await?;
        Ok(read_inferred_ranges(
            data.as_slice(),
            InferredSource::from_path(path),
            vessels,
            self.settings.threshold,
        )?)
    }
}
