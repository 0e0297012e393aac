//! Core projection engine for annual strategy projections

use log::debug;

use crate::inputs::{pct, Inputs};
use super::cashflows::{Projection, SaleSettlement, ScenarioResult, Strategy, YearRecord};
use super::npv::{calculate_irr, npv};
use super::state::{OwnState, Purchase, RentState, SplitState};

/// Where the terminal liquidation value sits in each cash-flow sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TerminalTiming {
    /// Appended as its own entry at index `years + 1`, one period past the
    /// last annual outflow. Matches the reference results.
    #[default]
    AfterHorizon,
    /// Added to the year-`years` cash flow
    AtHorizon,
}

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    pub terminal_timing: TerminalTiming,
}

/// Settle the sale of the current home
pub fn settle_sale(inputs: &Inputs) -> SaleSettlement {
    let selling_costs = inputs.current_home_value * pct(inputs.selling_costs_pct);
    let equity_before_tax = inputs.current_home_value - inputs.current_mortgage_balance - selling_costs;
    let capital_gains_tax = equity_before_tax.max(0.0) * pct(inputs.cap_gains_tax_pct);

    SaleSettlement {
        selling_costs,
        equity_before_tax,
        capital_gains_tax,
        net_proceeds: equity_before_tax - capital_gains_tax,
    }
}

/// Run a projection with the default configuration
pub fn simulate(inputs: &Inputs) -> Projection {
    ProjectionEngine::default().project(inputs)
}

/// The three strategy states advanced together each year
#[derive(Debug, Clone, Copy)]
struct Scenarios {
    rent: RentState,
    own: OwnState,
    split: SplitState,
}

impl Scenarios {
    fn advance(&self, inputs: &Inputs, year: u32) -> (Self, YearRecord) {
        let (rent, a) = self.rent.step(inputs);
        let (own, b) = self.own.step(inputs);
        let (split, c) = self.split.step(inputs);

        let record = YearRecord::from_parts(year, &a, &b, &c);
        (Self { rent, own, split }, record)
    }
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project all three strategies over `inputs.years` and rank them
    pub fn project(&self, inputs: &Inputs) -> Projection {
        let sale = settle_sale(inputs);
        let net_proceeds = sale.net_proceeds;
        let purchase = Purchase::from_inputs(inputs, net_proceeds);

        let initial = Scenarios {
            rent: RentState::initial(inputs, net_proceeds),
            own: OwnState::initial(inputs, net_proceeds, &purchase),
            split: SplitState::initial(inputs, net_proceeds),
        };

        let yearly_data: Vec<YearRecord> = (1..=inputs.years)
            .scan(initial, |scenarios, year| {
                let (next, record) = scenarios.advance(inputs, year);
                debug!(
                    "year {:>3}: NW A={:.2} B={:.2} C={:.2} principal={:.2}",
                    record.year,
                    record.net_worth_a,
                    record.net_worth_b,
                    record.net_worth_c,
                    record.remaining_principal,
                );
                *scenarios = next;
                Some(record)
            })
            .collect();

        let last = yearly_data.last();
        let terminal = |strategy: Strategy| -> f64 {
            match strategy {
                Strategy::SellAndRent => last.map(|r| r.invest_a).unwrap_or(0.0),
                Strategy::SellAndBuySmaller => {
                    last.map(|r| r.home_value - r.remaining_principal + r.invest_b).unwrap_or(0.0)
                }
                Strategy::RentHalfInvested => {
                    last.map(|r| r.invest_c).unwrap_or(0.0) + initial.split.cash
                }
            }
        };

        let results = Strategy::ALL
            .iter()
            .map(|&strategy| {
                let initial_cashflow = match strategy {
                    Strategy::SellAndBuySmaller => purchase.initial_cashflow(),
                    // Proceeds are already invested at t=0
                    Strategy::SellAndRent | Strategy::RentHalfInvested => 0.0,
                };
                self.score(inputs, strategy, initial_cashflow, &yearly_data, terminal(strategy))
            })
            .collect();

        Projection {
            net_proceeds,
            yearly_data,
            results,
            equity_before_tax: sale.equity_before_tax,
            selling_costs: sale.selling_costs,
            capital_gains_tax: sale.capital_gains_tax,
            purchase,
        }
    }

    /// Build a strategy's cash-flow sequence and discount it
    fn score(
        &self,
        inputs: &Inputs,
        strategy: Strategy,
        initial_cashflow: f64,
        yearly_data: &[YearRecord],
        terminal: f64,
    ) -> ScenarioResult {
        let mut cashflows = Vec::with_capacity(yearly_data.len() + 2);
        cashflows.push(initial_cashflow);
        cashflows.extend(yearly_data.iter().map(|r| -r.outflow(strategy)));

        match self.config.terminal_timing {
            TerminalTiming::AfterHorizon => cashflows.push(terminal),
            TerminalTiming::AtHorizon => {
                if let Some(last) = cashflows.last_mut() {
                    *last += terminal;
                }
            }
        }

        let npv = npv(&cashflows, inputs.discount_rate_pct);
        debug!("{}: npv={:.2} terminal={:.2}", strategy.label(), npv, terminal);

        ScenarioResult {
            strategy,
            label: strategy.label().to_string(),
            npv,
            terminal,
            irr: calculate_irr(&cashflows),
            cashflows,
        }
    }
}
