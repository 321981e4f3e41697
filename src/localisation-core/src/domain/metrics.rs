use crate::{
    AlignedResult, CoreResult,
    error::error::{LabelsLengthSnafu, WeightsLengthSnafu},
};
use snafu::ensure;

/// `|truth ∧ predicted| / |predicted|`, `None` when nothing is predicted positive.
pub fn precision_score(truth: &[bool], predicted: &[bool]) -> CoreResult<Option<f64>> {
    let counts = ConfusionCounts::new(truth, predicted)?;
    Ok(ratio(counts.true_positive, counts.predicted_positive()))
}

/// `|truth ∧ predicted| / |truth|`, `None` when there are no true positives to find.
pub fn recall_score(truth: &[bool], predicted: &[bool]) -> CoreResult<Option<f64>> {
    let counts = ConfusionCounts::new(truth, predicted)?;
    Ok(ratio(counts.true_positive, counts.actual_positive()))
}

/// Harmonic mean of precision and recall. Undefined if either of them is
/// undefined or zero.
pub fn f1_score(truth: &[bool], predicted: &[bool]) -> CoreResult<Option<f64>> {
    let counts = ConfusionCounts::new(truth, predicted)?;
    Ok(harmonic_mean(counts.precision(), counts.recall()))
}

/// Fraction of matching labels, weighted per element when `weights` is given.
/// `None` if the total weight is zero.
pub fn accuracy_score(
    truth: &[bool],
    predicted: &[bool],
    weights: Option<&[f64]>,
) -> CoreResult<Option<f64>> {
    ensure!(
        truth.len() == predicted.len(),
        LabelsLengthSnafu {
            truth: truth.len(),
            predicted: predicted.len(),
        }
    );

    let (correct, total) = match weights {
        None => {
            let correct = truth.iter().zip(predicted).filter(|(t, p)| t == p).count();
            (correct as f64, truth.len() as f64)
        }
        Some(weights) => {
            ensure!(
                weights.len() == truth.len(),
                WeightsLengthSnafu {
                    labels: truth.len(),
                    weights: weights.len(),
                }
            );
            truth
                .iter()
                .zip(predicted)
                .zip(weights)
                .fold((0.0, 0.0), |(correct, total), ((t, p), w)| {
                    (if t == p { correct + w } else { correct }, total + w)
                })
        }
    };

    Ok(if total == 0.0 {
        None
    } else {
        Some(correct / total)
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_positive: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_negative: u64,
}

impl ConfusionCounts {
    pub fn new(truth: &[bool], predicted: &[bool]) -> CoreResult<Self> {
        ensure!(
            truth.len() == predicted.len(),
            LabelsLengthSnafu {
                truth: truth.len(),
                predicted: predicted.len(),
            }
        );

        let mut counts = Self::default();
        counts.add_pairs(truth, predicted);
        Ok(counts)
    }

    /// Equivalent to counting over the concatenation of all added results.
    pub fn add_aligned(&mut self, aligned: &AlignedResult) {
        self.add_pairs(aligned.truth(), aligned.predicted());
    }

    fn add_pairs(&mut self, truth: &[bool], predicted: &[bool]) {
        for (t, p) in truth.iter().zip(predicted) {
            match (t, p) {
                (true, true) => self.true_positive += 1,
                (false, true) => self.false_positive += 1,
                (true, false) => self.false_negative += 1,
                (false, false) => self.true_negative += 1,
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.true_positive + self.false_positive + self.false_negative + self.true_negative
    }

    pub fn predicted_positive(&self) -> u64 {
        self.true_positive + self.false_positive
    }

    pub fn actual_positive(&self) -> u64 {
        self.true_positive + self.false_negative
    }

    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positive, self.predicted_positive())
    }

    pub fn recall(&self) -> Option<f64> {
        ratio(self.true_positive, self.actual_positive())
    }

    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    pub fn f1(&self) -> Option<f64> {
        harmonic_mean(self.precision(), self.recall())
    }
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}

fn harmonic_mean(precision: Option<f64>, recall: Option<f64>) -> Option<f64> {
    match (precision, recall) {
        (Some(p), Some(r)) if p > 0.0 && r > 0.0 => Some(2.0 / (1.0 / p + 1.0 / r)),
        _ => None,
    }
}
