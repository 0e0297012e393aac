//! Projection engine for the three relocation strategies

pub mod amortization;
mod state;
mod engine;
mod cashflows;
mod npv;

pub use amortization::{amortize_year, grow_annual, monthly_payment, AmortizationYear, PAYOFF_EPSILON};
pub use state::{
    net_invest_rate_pct, LivingCosts, OwnState, OwnYear, Purchase, RentState, RentYear, SplitState,
    SplitYear,
};
pub use engine::{settle_sale, simulate, ProjectionConfig, ProjectionEngine, TerminalTiming};
pub use cashflows::{Projection, ProjectionSummary, SaleSettlement, ScenarioResult, Strategy, YearRecord};
pub use npv::{calculate_irr, npv};
