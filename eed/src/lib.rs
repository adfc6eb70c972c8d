//!
//! # EED: Extended Edit Distance
//!
//! A character-level evaluation metric for a hypothesis text against a
//! reference text, e.g. machine translation output. It extends the CDER
//! alignment with
//! - *long jumps*: after each whitespace in the reference, every hypothesis
//!   position can be reached from the cheapest one at a fixed `jump` cost,
//!   so reordered words are cheap;
//! - *coverage*: hypothesis positions that are the row minimum for many
//!   reference characters are penalized with weight `rho`.
//!
//! The result is normalized by the reference length and capped at 1.
//!
//! It can be used in a few ways:
//! - Call `eed` with the default costs.
//! - Build an `Eed` scorer with a custom `CostModel` and `CoverageFormula`.
//! - With the `cli` feature, parse `CostArgs` and call `CostArgs::scorer`.
//!
//! ```
//! let hyp = "The relationship between Obama and Netanyahu has been strained for years.";
//! let reference = "Relations between Obama and Netanyahu have been strained for years.";
//! let s = eed::eed(hyp, reference);
//! assert!(0.0 < s && s < 0.3);
//! assert_ne!(s, eed::eed(reference, hyp));
//! ```

mod cost_model;
mod coverage;
mod scorer;
mod stats;

#[cfg(feature = "cli")]
pub mod cli;

pub use cost_model::{Cost, CostModel, CostModelError};
pub use coverage::CoverageFormula;
pub use scorer::{eed, Eed, PAD};
pub use stats::EedStats;
