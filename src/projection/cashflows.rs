//! Projection output structures

use serde::{Deserialize, Serialize};

use super::state::{OwnYear, Purchase, RentYear, SplitYear};

/// The three relocation strategies, in ranking tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// A: sell and rent, invest 100% of proceeds
    SellAndRent,
    /// B: sell and buy a smaller home, invest the rest
    SellAndBuySmaller,
    /// C: rent with storage, invest 50% and hold 50% as cash
    RentHalfInvested,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::SellAndRent,
        Strategy::SellAndBuySmaller,
        Strategy::RentHalfInvested,
    ];

    /// Display label shown on the summary cards
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::SellAndRent => "A: Sell & Rent (invest 100%)",
            Strategy::SellAndBuySmaller => "B: Sell & Buy Smaller (invest rest)",
            Strategy::RentHalfInvested => "C: Rent + Storage (invest 50%)",
        }
    }

    /// Single-letter key
    pub fn key(&self) -> char {
        match self {
            Strategy::SellAndRent => 'A',
            Strategy::SellAndBuySmaller => 'B',
            Strategy::RentHalfInvested => 'C',
        }
    }
}

/// Proceeds from selling the current home
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleSettlement {
    pub selling_costs: f64,
    pub equity_before_tax: f64,
    /// Never negative: a loss position pays no tax
    pub capital_gains_tax: f64,
    /// May be negative when the mortgage and costs exceed the sale price
    pub net_proceeds: f64,
}

/// One simulated year across all three strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    /// 1-indexed
    pub year: u32,

    // Net worth snapshots
    pub net_worth_a: f64,
    pub net_worth_b: f64,
    pub net_worth_c: f64,

    // Investable balances
    pub invest_a: f64,
    pub invest_b: f64,
    pub invest_c: f64,

    // Annual outflows
    pub out_a: f64,
    pub home_costs_b: f64,
    pub out_c: f64,

    // Scenario B home and mortgage
    pub remaining_principal: f64,
    pub home_value: f64,
    pub interest_paid_b: f64,
    pub principal_paid_b: f64,
}

impl YearRecord {
    pub fn from_parts(year: u32, a: &RentYear, b: &OwnYear, c: &SplitYear) -> Self {
        Self {
            year,
            net_worth_a: a.net_worth,
            net_worth_b: b.net_worth,
            net_worth_c: c.net_worth,
            invest_a: a.invest,
            invest_b: b.invest,
            invest_c: c.invest,
            out_a: a.outflow,
            home_costs_b: b.home_costs,
            out_c: c.outflow,
            remaining_principal: b.remaining_principal,
            home_value: b.home_value,
            interest_paid_b: b.interest_paid,
            principal_paid_b: b.principal_paid,
        }
    }

    pub fn net_worth(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::SellAndRent => self.net_worth_a,
            Strategy::SellAndBuySmaller => self.net_worth_b,
            Strategy::RentHalfInvested => self.net_worth_c,
        }
    }

    pub fn outflow(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::SellAndRent => self.out_a,
            Strategy::SellAndBuySmaller => self.home_costs_b,
            Strategy::RentHalfInvested => self.out_c,
        }
    }
}

/// Final per-strategy summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub strategy: Strategy,
    pub label: String,
    /// NPV of all cash flows including terminal value
    pub npv: f64,
    /// Liquidatable assets at the end of the horizon
    pub terminal: f64,
    /// Annual IRR of the same cash flows, if one exists
    pub irr: Option<f64>,
    /// Cash flows fed to the NPV, terminal value included
    pub cashflows: Vec<f64>,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    pub net_proceeds: f64,
    pub yearly_data: Vec<YearRecord>,
    /// Always A, B, C in that order
    pub results: Vec<ScenarioResult>,
    pub equity_before_tax: f64,
    pub selling_costs: f64,
    pub capital_gains_tax: f64,
    pub purchase: Purchase,
}

impl Projection {
    pub fn result(&self, strategy: Strategy) -> Option<&ScenarioResult> {
        self.results.iter().find(|r| r.strategy == strategy)
    }

    /// Highest NPV; ties go to the earliest of A, B, C
    pub fn recommended(&self) -> Option<&ScenarioResult> {
        self.results.iter().fold(None, |best: Option<&ScenarioResult>, r| match best {
            Some(b) if b.npv >= r.npv => Some(b),
            _ => Some(r),
        })
    }

    /// Totals over the horizon and the final-year net worths
    pub fn summary(&self) -> ProjectionSummary {
        let total_outflow = |strategy: Strategy| -> f64 {
            self.yearly_data.iter().map(|r| r.outflow(strategy)).sum()
        };
        let final_net_worth = |strategy: Strategy| -> f64 {
            self.yearly_data.last().map(|r| r.net_worth(strategy)).unwrap_or(0.0)
        };

        ProjectionSummary {
            total_years: self.yearly_data.len() as u32,
            net_proceeds: self.net_proceeds,
            total_outflow_a: total_outflow(Strategy::SellAndRent),
            total_outflow_b: total_outflow(Strategy::SellAndBuySmaller),
            total_outflow_c: total_outflow(Strategy::RentHalfInvested),
            total_interest_b: self.yearly_data.iter().map(|r| r.interest_paid_b).sum(),
            final_net_worth_a: final_net_worth(Strategy::SellAndRent),
            final_net_worth_b: final_net_worth(Strategy::SellAndBuySmaller),
            final_net_worth_c: final_net_worth(Strategy::RentHalfInvested),
            recommended: self.recommended().map(|r| r.strategy),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub total_years: u32,
    pub net_proceeds: f64,
    pub total_outflow_a: f64,
    pub total_outflow_b: f64,
    pub total_outflow_c: f64,
    pub total_interest_b: f64,
    pub final_net_worth_a: f64,
    pub final_net_worth_b: f64,
    pub final_net_worth_c: f64,
    pub recommended: Option<Strategy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(strategy: Strategy, npv: f64) -> ScenarioResult {
        ScenarioResult {
            strategy,
            label: strategy.label().to_string(),
            npv,
            terminal: 0.0,
            irr: None,
            cashflows: Vec::new(),
        }
    }

    fn projection(npvs: [f64; 3]) -> Projection {
        Projection {
            net_proceeds: 0.0,
            yearly_data: Vec::new(),
            results: Strategy::ALL
                .iter()
                .zip(npvs)
                .map(|(&s, npv)| result(s, npv))
                .collect(),
            equity_before_tax: 0.0,
            selling_costs: 0.0,
            capital_gains_tax: 0.0,
            purchase: Purchase {
                down_payment: 0.0,
                closing_costs: 0.0,
                mortgage_principal: 0.0,
                monthly_payment: 0.0,
            },
        }
    }

    #[test]
    fn test_recommended_is_max_npv() {
        let p = projection([1.0, 3.0, 2.0]);
        assert_eq!(p.recommended().unwrap().strategy, Strategy::SellAndBuySmaller);
    }

    #[test]
    fn test_recommended_ties_keep_encounter_order() {
        let p = projection([5.0, 5.0, 5.0]);
        assert_eq!(p.recommended().unwrap().strategy, Strategy::SellAndRent);

        let p = projection([1.0, 7.0, 7.0]);
        assert_eq!(p.recommended().unwrap().strategy, Strategy::SellAndBuySmaller);
    }

    #[test]
    fn test_recommended_empty() {
        let mut p = projection([0.0; 3]);
        p.results.clear();
        assert!(p.recommended().is_none());
    }

    fn record(year: u32, out: f64, interest: f64, net_worth: [f64; 3]) -> YearRecord {
        YearRecord {
            year,
            net_worth_a: net_worth[0],
            net_worth_b: net_worth[1],
            net_worth_c: net_worth[2],
            invest_a: 0.0,
            invest_b: 0.0,
            invest_c: 0.0,
            out_a: out,
            home_costs_b: out * 2.0,
            out_c: out * 3.0,
            remaining_principal: 0.0,
            home_value: 0.0,
            interest_paid_b: interest,
            principal_paid_b: 0.0,
        }
    }

    #[test]
    fn test_summary_totals() {
        let mut p = projection([1.0, 3.0, 2.0]);
        p.net_proceeds = 900_000.0;
        p.yearly_data = vec![
            record(1, 100.0, 40.0, [10.0, 20.0, 30.0]),
            record(2, 200.0, 35.0, [11.0, 21.0, 31.0]),
        ];

        let summary = p.summary();
        assert_eq!(summary.total_years, 2);
        assert_eq!(summary.net_proceeds, 900_000.0);
        assert_eq!(summary.total_outflow_a, 300.0);
        assert_eq!(summary.total_outflow_b, 600.0);
        assert_eq!(summary.total_outflow_c, 900.0);
        assert_eq!(summary.total_interest_b, 75.0);
        assert_eq!(summary.final_net_worth_a, 11.0);
        assert_eq!(summary.final_net_worth_b, 21.0);
        assert_eq!(summary.final_net_worth_c, 31.0);
        assert_eq!(summary.recommended, Some(Strategy::SellAndBuySmaller));
    }

    #[test]
    fn test_summary_of_empty_horizon() {
        let summary = projection([0.0, 0.0, 0.0]).summary();
        assert_eq!(summary.total_years, 0);
        assert_eq!(summary.total_outflow_a, 0.0);
        assert_eq!(summary.final_net_worth_b, 0.0);
        assert_eq!(summary.recommended, Some(Strategy::SellAndRent));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Strategy::SellAndRent.label(), "A: Sell & Rent (invest 100%)");
        assert_eq!(Strategy::RentHalfInvested.key(), 'C');
    }
}
