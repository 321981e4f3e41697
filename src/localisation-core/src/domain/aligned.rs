use crate::MinuteGrid;

/// Labels of the minutes known in both columns of a vessel's grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedResult {
    truth: Vec<bool>,
    predicted: Vec<bool>,
}

impl AlignedResult {
    /// Masks out every minute where either column is unknown. Returns `None`
    /// if no minute survives the mask.
    pub fn from_grid(grid: &MinuteGrid) -> Option<Self> {
        let (truth, predicted): (Vec<bool>, Vec<bool>) = grid
            .truth()
            .iter()
            .zip(grid.inferred())
            .filter(|(t, p)| t.is_known() && p.is_known())
            .map(|(t, p)| (t.is_fishing(), p.is_fishing()))
            .unzip();

        if truth.is_empty() {
            None
        } else {
            Some(Self { truth, predicted })
        }
    }

    pub fn truth(&self) -> &[bool] {
        &self.truth
    }

    pub fn predicted(&self) -> &[bool] {
        &self.predicted
    }

    pub fn len(&self) -> usize {
        self.truth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.truth.is_empty()
    }

    pub fn positive_minutes(&self) -> usize {
        self.truth.iter().filter(|v| **v).count()
    }

    /// Fraction of masked minutes where the prediction matches the truth.
    pub fn agreement(&self) -> f64 {
        let matching = self
            .truth
            .iter()
            .zip(&self.predicted)
            .filter(|(t, p)| t == p)
            .count();
        matching as f64 / self.len() as f64
    }
}
