use serde::{Deserialize, Serialize};

/// How the per-position visit counts are turned into the coverage penalty.
///
/// A position is visited once for every reference character for which it
/// holds the (first) minimum of the row.
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CoverageFormula {
    /// Sum of the raw counts of all positions visited more than once.
    #[default]
    VisitsAboveOne,
    /// Sum of `|count - 1|` over all positions, including unvisited ones.
    AbsDeviation,
}

impl CoverageFormula {
    pub fn sum(&self, visits: &[usize]) -> usize {
        match self {
            CoverageFormula::VisitsAboveOne => visits.iter().filter(|&&v| v > 1).sum(),
            CoverageFormula::AbsDeviation => visits.iter().map(|&v| v.abs_diff(1)).sum(),
        }
    }
}
