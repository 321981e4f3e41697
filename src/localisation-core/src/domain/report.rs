use crate::{CoarseCategory, ConfusionCounts};
use serde::Serialize;
use std::fmt::{self, Display};

pub const REPORT_HEADER: [&str; 5] = [
    "Gear Type (mmsi:true/total)",
    "Precision",
    "Recall",
    "Accuracy",
    "F1-Score",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowGroup {
    Category(CoarseCategory),
    Overall,
}

/// Metrics of one group of vessels, computed over the concatenation of their
/// masked minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    pub group: RowGroup,
    pub vessels: usize,
    pub positive_minutes: u64,
    pub total_minutes: u64,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub accuracy: f64,
    pub f1: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocalisationReport {
    pub categories: Vec<MetricsRow>,
    pub overall: Option<MetricsRow>,
}

impl MetricsRow {
    /// `None` if the group has no masked minutes.
    pub fn new(group: RowGroup, vessels: usize, counts: &ConfusionCounts) -> Option<Self> {
        Some(Self {
            group,
            vessels,
            positive_minutes: counts.actual_positive(),
            total_minutes: counts.total(),
            precision: counts.precision(),
            recall: counts.recall(),
            accuracy: counts.accuracy()?,
            f1: counts.f1(),
        })
    }

    /// Human readable row label, `Overall` or `{category} ({vessels}:{positive}/{total})`.
    pub fn label(&self) -> String {
        match self.group {
            RowGroup::Overall => "Overall".to_string(),
            RowGroup::Category(c) => format!(
                "{c} ({}:{}/{})",
                self.vessels, self.positive_minutes, self.total_minutes
            ),
        }
    }
}

impl Display for RowGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowGroup::Category(c) => write!(f, "{c}"),
            RowGroup::Overall => f.write_str("Overall"),
        }
    }
}

impl LocalisationReport {
    /// Category rows followed by the overall row.
    pub fn rows(&self) -> impl Iterator<Item = &MetricsRow> {
        self.categories.iter().chain(self.overall.as_ref())
    }
}
