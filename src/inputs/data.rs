//! Household inputs matching the analyzer's input form

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convert a whole-number percentage (6.5 = 6.5%) to a decimal rate
#[inline]
pub fn pct(x: f64) -> f64 {
    x / 100.0
}

/// A single, frozen set of household inputs for one simulation
///
/// All `*_pct` fields are whole-number percentages and go through [`pct`]
/// before use in any rate computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Inputs {
    // Current home
    /// Estimated sale price of the current home
    pub current_home_value: f64,
    /// Outstanding mortgage paid off at sale
    pub current_mortgage_balance: f64,
    /// Selling costs as % of sale price
    pub selling_costs_pct: f64,
    /// Effective capital gains tax on positive equity (simplified)
    pub cap_gains_tax_pct: f64,

    // Smaller home (buy)
    pub smaller_home_price: f64,
    /// Closing costs as % of purchase price
    pub smaller_home_closing_pct: f64,
    /// Share of net proceeds used as the down payment
    pub down_payment_from_proceeds_pct: f64,
    pub mortgage_rate_pct: f64,
    pub mortgage_years: u32,
    /// Property tax as % of home value, annually
    pub property_tax_pct: f64,
    pub insurance_annual: f64,
    pub hoa_monthly: f64,
    /// Maintenance as % of home value, annually
    pub maintenance_pct: f64,
    pub home_appreciation_pct: f64,

    // Rent
    pub monthly_rent: f64,
    pub rent_annual_inflation_pct: f64,

    // Storage
    pub include_storage: bool,
    pub storage_monthly: f64,
    pub storage_annual_inflation_pct: f64,

    // Investments
    /// Annual nominal return
    pub invest_return_pct: f64,
    /// Annual drag on returns from ongoing taxation
    pub invest_tax_drag_pct: f64,

    // Horizon & discounting
    pub years: u32,
    /// Discount rate for NPV of cash flows
    pub discount_rate_pct: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            current_home_value: 1_300_000.0,
            current_mortgage_balance: 0.0,
            selling_costs_pct: 6.0,
            cap_gains_tax_pct: 0.0,

            smaller_home_price: 700_000.0,
            smaller_home_closing_pct: 2.5,
            down_payment_from_proceeds_pct: 50.0,
            mortgage_rate_pct: 6.5,
            mortgage_years: 30,
            property_tax_pct: 2.1,
            insurance_annual: 2_500.0,
            hoa_monthly: 250.0,
            maintenance_pct: 1.0,
            home_appreciation_pct: 3.0,

            monthly_rent: 4_500.0,
            rent_annual_inflation_pct: 3.0,

            include_storage: true,
            storage_monthly: 350.0,
            storage_annual_inflation_pct: 3.0,

            invest_return_pct: 6.5,
            invest_tax_drag_pct: 0.5,

            years: 15,
            discount_rate_pct: 5.5,
        }
    }
}

/// Errors raised while loading or validating inputs
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read inputs: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse inputs: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("field `{field}` is not a finite number")]
    NonFinite { field: &'static str },

    #[error("field `{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("field `{field}` must be at least one year")]
    ZeroTerm { field: &'static str },
}

impl Inputs {
    /// Numeric fields by their serialized name, in form order
    pub fn numeric_fields(&self) -> [(&'static str, f64); 20] {
        [
            ("currentHomeValue", self.current_home_value),
            ("currentMortgageBalance", self.current_mortgage_balance),
            ("sellingCostsPct", self.selling_costs_pct),
            ("capGainsTaxPct", self.cap_gains_tax_pct),
            ("smallerHomePrice", self.smaller_home_price),
            ("smallerHomeClosingPct", self.smaller_home_closing_pct),
            ("downPaymentFromProceedsPct", self.down_payment_from_proceeds_pct),
            ("mortgageRatePct", self.mortgage_rate_pct),
            ("propertyTaxPct", self.property_tax_pct),
            ("insuranceAnnual", self.insurance_annual),
            ("hoaMonthly", self.hoa_monthly),
            ("maintenancePct", self.maintenance_pct),
            ("homeAppreciationPct", self.home_appreciation_pct),
            ("monthlyRent", self.monthly_rent),
            ("rentAnnualInflationPct", self.rent_annual_inflation_pct),
            ("storageMonthly", self.storage_monthly),
            ("storageAnnualInflationPct", self.storage_annual_inflation_pct),
            ("investReturnPct", self.invest_return_pct),
            ("investTaxDragPct", self.invest_tax_drag_pct),
            ("discountRatePct", self.discount_rate_pct),
        ]
    }

    /// Replace every non-finite numeric field with 0
    ///
    /// Mirrors the form's fallback for empty or unparseable text fields.
    pub fn sanitized(mut self) -> Self {
        for value in [
            &mut self.current_home_value,
            &mut self.current_mortgage_balance,
            &mut self.selling_costs_pct,
            &mut self.cap_gains_tax_pct,
            &mut self.smaller_home_price,
            &mut self.smaller_home_closing_pct,
            &mut self.down_payment_from_proceeds_pct,
            &mut self.mortgage_rate_pct,
            &mut self.property_tax_pct,
            &mut self.insurance_annual,
            &mut self.hoa_monthly,
            &mut self.maintenance_pct,
            &mut self.home_appreciation_pct,
            &mut self.monthly_rent,
            &mut self.rent_annual_inflation_pct,
            &mut self.storage_monthly,
            &mut self.storage_annual_inflation_pct,
            &mut self.invest_return_pct,
            &mut self.invest_tax_drag_pct,
            &mut self.discount_rate_pct,
        ] {
            if !value.is_finite() {
                *value = 0.0;
            }
        }
        self
    }

    /// Reject inputs the engine is not meant to see
    ///
    /// The engine never calls this itself: it assumes well-formed values and
    /// tolerates negative proceeds algebraically.
    pub fn validate(&self) -> Result<(), InputError> {
        for (field, value) in self.numeric_fields() {
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }
        }

        // Rates may be negative; amounts and cost shares may not
        let amounts = [
            ("currentHomeValue", self.current_home_value),
            ("currentMortgageBalance", self.current_mortgage_balance),
            ("sellingCostsPct", self.selling_costs_pct),
            ("capGainsTaxPct", self.cap_gains_tax_pct),
            ("smallerHomePrice", self.smaller_home_price),
            ("smallerHomeClosingPct", self.smaller_home_closing_pct),
            ("downPaymentFromProceedsPct", self.down_payment_from_proceeds_pct),
            ("propertyTaxPct", self.property_tax_pct),
            ("insuranceAnnual", self.insurance_annual),
            ("hoaMonthly", self.hoa_monthly),
            ("maintenancePct", self.maintenance_pct),
            ("monthlyRent", self.monthly_rent),
            ("storageMonthly", self.storage_monthly),
        ];
        for (field, value) in amounts {
            if value < 0.0 {
                return Err(InputError::Negative { field, value });
            }
        }

        if self.years == 0 {
            return Err(InputError::ZeroTerm { field: "years" });
        }
        if self.mortgage_years == 0 {
            return Err(InputError::ZeroTerm { field: "mortgageYears" });
        }

        Ok(())
    }
}
