//! Fixed-rate mortgage amortization and annual compounding helpers

use crate::inputs::pct;

/// Remaining principal at or below this is treated as paid off
pub const PAYOFF_EPSILON: f64 = 1e-6;

/// Level monthly payment for a fixed-rate loan with monthly compounding
///
/// `payment = P * r / (1 - (1 + r)^-n)` with `r = rate / 12`, `n = years * 12`.
/// A zero rate falls back to straight-line repayment `P / n`.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let r = pct(annual_rate_pct) / 12.0;
    let n = years as f64 * 12.0;
    if r == 0.0 {
        return principal / n;
    }
    principal * r / (1.0 - (1.0 + r).powf(-n))
}

/// Grow a value by one year at an annual percentage rate
#[inline]
pub fn grow_annual(value: f64, rate_pct: f64) -> f64 {
    value * (1.0 + pct(rate_pct))
}

/// Interest and principal paid over one year of monthly payments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationYear {
    pub interest_paid: f64,
    pub principal_paid: f64,
    /// Principal outstanding after the last payment of the year
    pub remaining_principal: f64,
}

/// Run twelve monthly payments against the outstanding principal
///
/// Principal paid is capped at the outstanding balance so the loan never
/// overshoots into a negative balance, and the loop stops early once the
/// balance reaches [`PAYOFF_EPSILON`]. A non-positive balance has nothing to
/// amortize and comes back as zero.
pub fn amortize_year(remaining: f64, payment: f64, monthly_rate: f64) -> AmortizationYear {
    let mut year = AmortizationYear {
        interest_paid: 0.0,
        principal_paid: 0.0,
        remaining_principal: remaining.max(0.0),
    };
    if remaining <= 0.0 {
        return year;
    }

    for _month in 0..12 {
        let interest = year.remaining_principal * monthly_rate;
        let principal_paid = (payment - interest).min(year.remaining_principal);
        year.remaining_principal -= principal_paid;
        year.interest_paid += interest;
        year.principal_paid += principal_paid;
        if year.remaining_principal <= PAYOFF_EPSILON {
            break;
        }
    }

    year
}
