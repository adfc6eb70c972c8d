//! This module contains the `CostModel` used by the EED scorer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The costs are fractional; deletions are cheap compared to insertions.
pub type Cost = f64;

fn default_deletion() -> Cost {
    0.2
}
fn default_insertion() -> Cost {
    1.0
}
fn default_substitution() -> Cost {
    1.0
}
fn default_jump() -> Cost {
    2.0
}
fn default_rho() -> Cost {
    0.3
}

/// Returned when a cost parameter is negative, NaN or infinite.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CostModelError {
    #[error("{name} cost must be finite, got {value}")]
    NotFinite { name: &'static str, value: Cost },
    #[error("{name} cost must be non-negative, got {value}")]
    Negative { name: &'static str, value: Cost },
}

/// Edit costs of the CDER grid, the long jump cost, and the coverage weight.
///
/// `del` is charged for skipping a hypothesis character, `ins` for skipping a
/// reference character, and `sub` for aligning two different characters.
/// `jump` bounds every cell of a row after a reference whitespace to
/// `jump + min(row)`. `rho` weighs the coverage penalty.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CostModel {
    #[serde(default = "default_deletion")]
    pub del: Cost,
    #[serde(default = "default_insertion")]
    pub ins: Cost,
    #[serde(default = "default_substitution")]
    pub sub: Cost,
    #[serde(default = "default_jump")]
    pub jump: Cost,
    #[serde(default = "default_rho")]
    pub rho: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            del: default_deletion(),
            ins: default_insertion(),
            sub: default_substitution(),
            jump: default_jump(),
            rho: default_rho(),
        }
    }
}

impl CostModel {
    pub fn new(
        del: Cost,
        ins: Cost,
        sub: Cost,
        jump: Cost,
        rho: Cost,
    ) -> Result<Self, CostModelError> {
        let cm = Self {
            del,
            ins,
            sub,
            jump,
            rho,
        };
        cm.validate()?;
        Ok(cm)
    }

    /// Plain edit costs without the coverage penalty.
    pub fn without_coverage(self) -> Self {
        Self { rho: 0.0, ..self }
    }

    /// Check that all parameters are finite and non-negative.
    ///
    /// Useful for models that were deserialized or modified field by field.
    pub fn validate(&self) -> Result<(), CostModelError> {
        for (name, value) in [
            ("deletion", self.del),
            ("insertion", self.ins),
            ("substitution", self.sub),
            ("jump", self.jump),
            ("rho", self.rho),
        ] {
            if !value.is_finite() {
                return Err(CostModelError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(CostModelError::Negative { name, value });
            }
        }
        Ok(())
    }
}
