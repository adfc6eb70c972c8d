//! CDER prefix alignment extended with long jumps and a coverage penalty.
//!
//! Each row corresponds to a prefix of the reference, and `row[i]` is the
//! cost of the cheapest path from the origin of the CDER grid to hypothesis
//! position `i`. The hypothesis may be entered anywhere at cost 1, which is
//! what makes the metric tolerant to reordering; whitespace in the reference
//! additionally allows jumping from the row minimum to any position.
//!
//! Only two rows and the visit counters are kept alive.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    cost_model::{Cost, CostModel},
    coverage::CoverageFormula,
    stats::EedStats,
};

/// Sentinel prepended and appended to both sequences.
pub const PAD: char = ' ';

fn pad(s: impl IntoIterator<Item = char>) -> Vec<char> {
    std::iter::once(PAD)
        .chain(s)
        .chain(std::iter::once(PAD))
        .collect()
}

/// Position and value of the minimum of `row`. Ties go to the lowest index.
pub(crate) fn first_min(row: &[Cost]) -> (usize, Cost) {
    let mut best = (0, row[0]);
    for (i, &c) in row.iter().enumerate().skip(1) {
        if c < best.1 {
            best = (i, c);
        }
    }
    best
}

/// The Extended Edit Distance scorer.
///
/// Scores are in `[0, 1]`, lower is better, and in general
/// `score(a, b) != score(b, a)`.
///
/// ```
/// use eed::Eed;
///
/// let eed = Eed::default();
/// assert_eq!(eed.score("hello world", "hello world"), 0.0);
/// assert!(eed.score("world hello", "hello world") < eed.score("abcde fghij", "hello world"));
/// ```
#[derive(Default, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Eed {
    #[serde(default)]
    pub cm: CostModel,
    #[serde(default)]
    pub coverage: CoverageFormula,
}

impl Eed {
    pub fn new(cm: CostModel) -> Self {
        Self {
            cm,
            coverage: CoverageFormula::default(),
        }
    }

    pub fn with_coverage(self, coverage: CoverageFormula) -> Self {
        Self { coverage, ..self }
    }

    /// Score the hypothesis against the reference.
    pub fn score(&self, hyp: &str, reference: &str) -> Cost {
        self.score_with_stats(hyp, reference).score
    }

    pub fn score_chars(&self, hyp: &[char], reference: &[char]) -> Cost {
        self.score_chars_with_stats(hyp, reference).score
    }

    pub fn score_with_stats(&self, hyp: &str, reference: &str) -> EedStats {
        self.run(&pad(hyp.chars()), &pad(reference.chars()))
    }

    pub fn score_chars_with_stats(&self, hyp: &[char], reference: &[char]) -> EedStats {
        self.run(
            &pad(hyp.iter().copied()),
            &pad(reference.iter().copied()),
        )
    }

    /// Runs the DP on already padded sequences.
    fn run(&self, hyp: &[char], reference: &[char]) -> EedStats {
        let CostModel {
            del,
            ins,
            sub,
            jump,
            rho,
        } = self.cm;
        let width = hyp.len() + 1;

        // CDER initialisation: the origin is free, every other start costs 1.
        let mut row = vec![1.0; width];
        row[0] = 0.0;
        let mut next_row = vec![0.0; width];
        let mut visits = vec![0usize; width];

        for &r in reference {
            next_row[0] = row[0] + 1.0;
            for (i, &h) in hyp.iter().enumerate() {
                let diagonal = row[i] + if r == h { 0.0 } else { sub };
                next_row[i + 1] = (next_row[i] + del).min(diagonal).min(row[i + 1] + ins);
            }

            let (min_idx, min_cost) = first_min(&next_row);
            visits[min_idx] += 1;

            // Long jump.
            if r.is_whitespace() {
                let long_jump = jump + min_cost;
                for c in next_row.iter_mut() {
                    *c = c.min(long_jump);
                }
            }

            std::mem::swap(&mut row, &mut next_row);
        }

        let errors = row[width - 1];
        let stats = EedStats::new(
            hyp.len(),
            reference.len(),
            errors,
            self.coverage.sum(&visits),
            rho,
        );
        trace!("{stats}");
        stats
    }
}

/// EED with the default cost model.
pub fn eed(hyp: &str, reference: &str) -> Cost {
    Eed::default().score(hyp, reference)
}
