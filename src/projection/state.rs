//! Per-strategy projection state
//!
//! Each strategy owns its own state shape and advances through a pure
//! `step` that returns the next state plus that year's figures. The engine
//! threads all three through the year loop.

use serde::{Deserialize, Serialize};

use crate::inputs::{pct, Inputs};
use super::amortization::{amortize_year, grow_annual, monthly_payment};

/// Annual investment growth net of tax drag, as a whole-number percentage
#[inline]
pub fn net_invest_rate_pct(inputs: &Inputs) -> f64 {
    inputs.invest_return_pct - inputs.invest_tax_drag_pct
}

/// Nominal monthly rent and storage, escalated once per year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LivingCosts {
    pub rent_monthly: f64,
    pub storage_monthly: f64,
}

impl LivingCosts {
    pub fn initial(inputs: &Inputs) -> Self {
        Self {
            rent_monthly: inputs.monthly_rent,
            storage_monthly: inputs.storage_monthly,
        }
    }

    /// This year's rent plus storage (when included)
    pub fn annual_outflow(&self, inputs: &Inputs) -> f64 {
        let storage = if inputs.include_storage { self.storage_monthly } else { 0.0 };
        self.rent_monthly * 12.0 + storage * 12.0
    }

    /// Next year's nominal costs. Storage escalates even when excluded.
    pub fn escalated(&self, inputs: &Inputs) -> Self {
        Self {
            rent_monthly: self.rent_monthly * (1.0 + pct(inputs.rent_annual_inflation_pct)),
            storage_monthly: self.storage_monthly * (1.0 + pct(inputs.storage_annual_inflation_pct)),
        }
    }
}

/// Scenario A: sell, rent, invest all proceeds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentState {
    pub invest: f64,
    pub living: LivingCosts,
}

/// Scenario A's figures for one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentYear {
    pub invest: f64,
    pub outflow: f64,
    pub net_worth: f64,
}

impl RentState {
    pub fn initial(inputs: &Inputs, net_proceeds: f64) -> Self {
        Self {
            invest: net_proceeds,
            living: LivingCosts::initial(inputs),
        }
    }

    /// Grow the balance, then deduct this year's outflow from the snapshot only
    pub fn step(&self, inputs: &Inputs) -> (Self, RentYear) {
        let invest = grow_annual(self.invest, net_invest_rate_pct(inputs));
        let outflow = self.living.annual_outflow(inputs);

        let next = Self {
            invest,
            living: self.living.escalated(inputs),
        };
        let year = RentYear {
            invest,
            outflow,
            net_worth: invest - outflow,
        };
        (next, year)
    }
}

/// Upfront figures for buying the smaller home
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub down_payment: f64,
    pub closing_costs: f64,
    pub mortgage_principal: f64,
    pub monthly_payment: f64,
}

impl Purchase {
    pub fn from_inputs(inputs: &Inputs, net_proceeds: f64) -> Self {
        let down_payment = net_proceeds * pct(inputs.down_payment_from_proceeds_pct);
        // A down payment above the price buys outright; the excess is not a loan
        let mortgage_principal = (inputs.smaller_home_price - down_payment).max(0.0);
        Self {
            down_payment,
            closing_costs: inputs.smaller_home_price * pct(inputs.smaller_home_closing_pct),
            mortgage_principal,
            monthly_payment: monthly_payment(
                mortgage_principal,
                inputs.mortgage_rate_pct,
                inputs.mortgage_years,
            ),
        }
    }

    /// Cash flow at t=0 (negative = outflow)
    pub fn initial_cashflow(&self) -> f64 {
        -(self.down_payment + self.closing_costs)
    }
}

/// Scenario B: sell, buy smaller with a mortgage, invest the remainder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnState {
    pub invest: f64,
    pub home_value: f64,
    pub remaining_principal: f64,
    pub monthly_payment: f64,
}

/// Scenario B's figures for one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnYear {
    pub invest: f64,
    pub home_costs: f64,
    pub net_worth: f64,
    /// Home value after this year's appreciation
    pub home_value: f64,
    /// Never negative
    pub remaining_principal: f64,
    pub interest_paid: f64,
    pub principal_paid: f64,
}

impl OwnState {
    pub fn initial(inputs: &Inputs, net_proceeds: f64, purchase: &Purchase) -> Self {
        Self {
            invest: net_proceeds * (1.0 - pct(inputs.down_payment_from_proceeds_pct)),
            home_value: inputs.smaller_home_price,
            remaining_principal: purchase.mortgage_principal,
            monthly_payment: purchase.monthly_payment,
        }
    }

    /// Grow investments, amortize twelve months, charge carrying costs on the
    /// pre-appreciation value, then appreciate the home
    pub fn step(&self, inputs: &Inputs) -> (Self, OwnYear) {
        let invest = grow_annual(self.invest, net_invest_rate_pct(inputs));

        let monthly_rate = pct(inputs.mortgage_rate_pct) / 12.0;
        let amortized = amortize_year(self.remaining_principal, self.monthly_payment, monthly_rate);

        let property_tax = self.home_value * pct(inputs.property_tax_pct);
        let maintenance = self.home_value * pct(inputs.maintenance_pct);
        let hoa = inputs.hoa_monthly * 12.0;
        let home_costs =
            amortized.interest_paid + property_tax + maintenance + inputs.insurance_annual + hoa;

        let home_value = grow_annual(self.home_value, inputs.home_appreciation_pct);
        let net_worth = invest + home_value - amortized.remaining_principal - home_costs;

        let next = Self {
            invest,
            home_value,
            remaining_principal: amortized.remaining_principal,
            monthly_payment: self.monthly_payment,
        };
        let year = OwnYear {
            invest,
            home_costs,
            net_worth,
            home_value,
            remaining_principal: amortized.remaining_principal,
            interest_paid: amortized.interest_paid,
            principal_paid: amortized.principal_paid,
        };
        (next, year)
    }
}

/// Scenario C: rent with storage, half invested and half held as flat cash
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitState {
    pub invest: f64,
    /// Never grows
    pub cash: f64,
    pub living: LivingCosts,
}

/// Scenario C's figures for one year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitYear {
    pub invest: f64,
    pub outflow: f64,
    pub net_worth: f64,
}

impl SplitState {
    pub fn initial(inputs: &Inputs, net_proceeds: f64) -> Self {
        Self {
            invest: net_proceeds * 0.5,
            cash: net_proceeds * 0.5,
            living: LivingCosts::initial(inputs),
        }
    }

    pub fn step(&self, inputs: &Inputs) -> (Self, SplitYear) {
        let invest = grow_annual(self.invest, net_invest_rate_pct(inputs));
        let outflow = self.living.annual_outflow(inputs);

        let next = Self {
            invest,
            cash: self.cash,
            living: self.living.escalated(inputs),
        };
        let year = SplitYear {
            invest,
            outflow,
            net_worth: invest + self.cash - outflow,
        };
        (next, year)
    }
}
