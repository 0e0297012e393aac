//! Scenario runner for batch projections and sensitivity sweeps
//!
//! Every run is an independent pure projection, so batches and sweeps fan
//! out across threads with rayon and come back in input order.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::inputs::Inputs;
use crate::projection::{Projection, ProjectionConfig, ProjectionEngine};

/// An input that a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SweepParam {
    DiscountRate,
    InvestReturn,
    HomeAppreciation,
    RentInflation,
    MortgageRate,
    DownPayment,
    /// Horizon in years; values are truncated to whole years
    Years,
}

impl SweepParam {
    /// Copy of `base` with this parameter set to `value`
    pub fn apply(&self, base: &Inputs, value: f64) -> Inputs {
        let mut inputs = base.clone();
        match self {
            SweepParam::DiscountRate => inputs.discount_rate_pct = value,
            SweepParam::InvestReturn => inputs.invest_return_pct = value,
            SweepParam::HomeAppreciation => inputs.home_appreciation_pct = value,
            SweepParam::RentInflation => inputs.rent_annual_inflation_pct = value,
            SweepParam::MortgageRate => inputs.mortgage_rate_pct = value,
            SweepParam::DownPayment => inputs.down_payment_from_proceeds_pct = value,
            SweepParam::Years => inputs.years = value.max(0.0) as u32,
        }
        inputs
    }
}

/// One point of a sensitivity sweep
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub value: f64,
    pub projection: Projection,
}

/// Runner holding base inputs and engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(Inputs::default());
///
/// // NPVs across discount rates
/// let points = runner.sweep(SweepParam::DiscountRate, &[3.0, 5.5, 8.0]);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_inputs: Inputs,
    config: ProjectionConfig,
}

impl ScenarioRunner {
    pub fn new(base_inputs: Inputs) -> Self {
        Self::with_config(base_inputs, ProjectionConfig::default())
    }

    pub fn with_config(base_inputs: Inputs, config: ProjectionConfig) -> Self {
        Self { base_inputs, config }
    }

    /// Project the base inputs
    pub fn run(&self) -> Projection {
        self.engine().project(&self.base_inputs)
    }

    /// Project many independent input sets
    pub fn run_batch(&self, batch: &[Inputs]) -> Vec<Projection> {
        let engine = self.engine();
        batch.par_iter().map(|inputs| engine.project(inputs)).collect()
    }

    /// Vary one parameter of the base inputs across `values`
    pub fn sweep(&self, param: SweepParam, values: &[f64]) -> Vec<SweepPoint> {
        info!("Sweeping {:?} across {} values", param, values.len());
        let engine = self.engine();
        values
            .par_iter()
            .map(|&value| SweepPoint {
                value,
                projection: engine.project(&param.apply(&self.base_inputs, value)),
            })
            .collect()
    }

    pub fn inputs(&self) -> &Inputs {
        &self.base_inputs
    }

    fn engine(&self) -> ProjectionEngine {
        ProjectionEngine::new(self.config.clone())
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(Inputs::default())
    }
}
