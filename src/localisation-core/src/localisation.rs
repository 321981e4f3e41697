use crate::*;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, event, info, instrument, Level};

#[derive(Debug, Clone, PartialEq)]
pub struct LocalisationSettings {
    /// Name of the split whose vessels are scored.
    pub test_split: String,
    pub raster: RasterSettings,
}

/// Masked per-minute labels of every vessel that had at least one minute known
/// in both the true and inferred data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocalisationResults {
    aligned: BTreeMap<VesselId, AlignedResult>,
}

impl Default for LocalisationSettings {
    fn default() -> Self {
        Self {
            test_split: "Test".to_string(),
            raster: RasterSettings::default(),
        }
    }
}

impl LocalisationResults {
    pub fn get(&self, vessel: &VesselId) -> Option<&AlignedResult> {
        self.aligned.get(vessel)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VesselId, &AlignedResult)> {
        self.aligned.iter()
    }

    pub fn len(&self) -> usize {
        self.aligned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned.is_empty()
    }
}

impl FromIterator<(VesselId, AlignedResult)> for LocalisationResults {
    fn from_iter<T: IntoIterator<Item = (VesselId, AlignedResult)>>(iter: T) -> Self {
        Self {
            aligned: iter.into_iter().collect(),
        }
    }
}

/// Loads all inputs through the given ports, scores the test split and returns
/// the aggregated report.
#[instrument(skip_all, fields(app.split = %settings.test_split))]
pub async fn evaluate_localisation(
    metadata: &dyn VesselMetadataOutbound,
    truth: &dyn TrueRangesOutbound,
    inferred: &dyn InferredRangesOutbound,
    settings: &LocalisationSettings,
) -> CoreResult<LocalisationReport> {
    info!("loading vessel metadata");
    let metadata = metadata.vessel_metadata(&settings.test_split).await?;

    let vessels = metadata
        .vessels_in_split(&settings.test_split)
        .into_iter()
        .collect::<BTreeSet<_>>();

    info!("loading inferred ranges of {} vessels", vessels.len());
    let inferred_ranges = inferred.inferred_ranges(&vessels).await?;

    info!("loading true ranges");
    let true_ranges = truth
        .true_ranges(&metadata.splits, &settings.test_split)
        .await?;

    info!("comparing localisation");
    let results = compare_fishing_localisation(&true_ranges, &inferred_ranges, &settings.raster);

    Ok(aggregate_localisation(&results, &metadata.labels, taxonomy()))
}

/// Rasterizes and masks every vessel with true ranges, one vessel at a time.
/// Vessels without inferred ranges or without any minute known in both are
/// left out.
#[instrument(skip_all)]
pub fn compare_fishing_localisation(
    true_ranges: &VesselRangeSet,
    inferred_ranges: &VesselRangeSet,
    settings: &RasterSettings,
) -> LocalisationResults {
    let mut aligned = BTreeMap::new();

    for (vessel, truth) in true_ranges {
        let Some(inferred) = inferred_ranges.get(vessel) else {
            debug!("no inferred ranges for vessel {vessel}");
            continue;
        };

        debug!("processing {} true ranges of vessel {vessel}", truth.len());

        let Some(grid) = MinuteGrid::build(truth, inferred, settings) else {
            continue;
        };

        if let Some(result) = AlignedResult::from_grid(&grid) {
            debug!("accuracy for vessel {vessel}: {}", result.agreement());
            aligned.insert(vessel.clone(), result);
        }
    }

    LocalisationResults { aligned }
}

/// Builds one row per report category with at least one scored vessel, and an
/// overall row spanning every scored vessel regardless of label.
#[instrument(skip_all)]
pub fn aggregate_localisation(
    results: &LocalisationResults,
    labels: &LabelMap,
    taxonomy: &Taxonomy,
) -> LocalisationReport {
    let mut categories = Vec::new();

    for category in taxonomy.report_categories() {
        let mut counts = ConfusionCounts::default();
        let mut vessels = Vec::new();

        for (vessel, label) in labels {
            let Some(aligned) = results.get(vessel) else {
                continue;
            };
            if taxonomy.fishing_category(label) != category {
                continue;
            }
            counts.add_aligned(aligned);
            vessels.push(vessel.as_str());
        }

        if vessels.is_empty() {
            continue;
        }

        info!("vessels for {category}: {vessels:?}");

        if let Some(row) = MetricsRow::new(RowGroup::Category(category), vessels.len(), &counts) {
            categories.push(row);
        }
    }

    let mut counts = ConfusionCounts::default();
    for (_, aligned) in results.iter() {
        counts.add_aligned(aligned);
    }

    let overall = MetricsRow::new(RowGroup::Overall, results.len(), &counts);

    match &overall {
        Some(o) => event!(
            Level::INFO,
            "overall localisation accuracy: {}, precision: {:?}, recall: {:?}",
            o.accuracy,
            o.precision,
            o.recall
        ),
        None => event!(Level::WARN, "no vessel had minutes known in both true and inferred data"),
    }

    LocalisationReport {
        categories,
        overall,
    }
}
