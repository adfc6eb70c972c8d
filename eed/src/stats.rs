use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::cost_model::Cost;

/// Everything the scorer computed for a single (hypothesis, reference) pair.
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EedStats {
    /// Hypothesis length including the two padding spaces.
    pub len_hyp: usize,
    /// Reference length including the two padding spaces.
    pub len_ref: usize,
    /// Cost of the last cell of the final row.
    pub errors: Cost,
    /// Coverage sum before weighting by `rho`.
    pub coverage: usize,
    /// `rho * coverage`.
    pub weighted_coverage: Cost,
    /// `(errors + weighted_coverage) / (len_ref + weighted_coverage)`, before the cap.
    pub ratio: Cost,
    /// `min(1, ratio)`.
    pub score: Cost,
}

impl EedStats {
    pub(crate) fn new(
        len_hyp: usize,
        len_ref: usize,
        errors: Cost,
        coverage: usize,
        rho: Cost,
    ) -> Self {
        let weighted_coverage = rho * coverage as Cost;
        let denominator = len_ref as Cost + weighted_coverage;
        // Padding makes the reference at least two characters long.
        debug_assert!(denominator > 0.0, "padded reference cannot be empty");
        let ratio = (errors + weighted_coverage) / denominator;
        Self {
            len_hyp,
            len_ref,
            errors,
            coverage,
            weighted_coverage,
            ratio,
            score: ratio.min(1.0),
        }
    }

    /// True when the score was capped at 1.
    pub fn is_capped(&self) -> bool {
        self.ratio > 1.0
    }
}

impl Display for EedStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "score {:.4} errors {:.2} coverage {} (weighted {:.2}) |hyp| {} |ref| {}",
            self.score,
            self.errors,
            self.coverage,
            self.weighted_coverage,
            self.len_hyp,
            self.len_ref
        )
    }
}
