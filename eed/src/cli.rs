use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{
    cost_model::{Cost, CostModel, CostModelError},
    coverage::CoverageFormula,
    scorer::Eed,
};

/// Cost model arguments.
#[derive(Parser, Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[clap(next_help_heading = "Costs")]
#[serde(deny_unknown_fields)]
pub struct CostArgs {
    /// Cost of skipping a hypothesis character.
    #[clap(long, default_value_t = 0.2, value_name = "COST", display_order = 10)]
    pub deletion: Cost,

    /// Cost of skipping a reference character.
    #[clap(long, default_value_t = 1.0, value_name = "COST", display_order = 10)]
    pub insertion: Cost,

    /// Cost of aligning two different characters.
    #[clap(long, default_value_t = 1.0, value_name = "COST", display_order = 10)]
    pub substitution: Cost,

    /// Cost of a long jump at whitespace in the reference.
    #[clap(long, default_value_t = 2.0, value_name = "COST", display_order = 10)]
    pub jump: Cost,

    /// Weight of the coverage penalty.
    #[clap(long, default_value_t = 0.3, value_name = "RHO", display_order = 10)]
    pub rho: Cost,

    /// How repeated visits are turned into the coverage penalty.
    #[clap(long, default_value_t, value_enum, hide_short_help = true)]
    #[serde(default)]
    pub coverage: CoverageFormula,
}

impl Default for CostArgs {
    fn default() -> Self {
        let cm = CostModel::default();
        Self {
            deletion: cm.del,
            insertion: cm.ins,
            substitution: cm.sub,
            jump: cm.jump,
            rho: cm.rho,
            coverage: CoverageFormula::default(),
        }
    }
}

impl CostArgs {
    pub fn cost_model(&self) -> Result<CostModel, CostModelError> {
        CostModel::new(
            self.deletion,
            self.insertion,
            self.substitution,
            self.jump,
            self.rho,
        )
    }

    pub fn scorer(&self) -> Result<Eed, CostModelError> {
        Ok(Eed::new(self.cost_model()?).with_coverage(self.coverage))
    }
}
