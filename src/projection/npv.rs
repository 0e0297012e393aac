//! Discounting and Internal Rate of Return (IRR) for annual cash-flow sequences

use crate::inputs::pct;

/// Net present value of `cashflows`, entry `t` discounted by `(1 + r)^t`
///
/// # Arguments
/// * `cashflows` - Annual cash flows starting at t=0 (positive = inflow, negative = outflow)
/// * `discount_rate_pct` - Annual discount rate as a whole-number percentage
pub fn npv(cashflows: &[f64], discount_rate_pct: f64) -> f64 {
    npv_at_rate(cashflows, pct(discount_rate_pct))
}

/// Annual rate at which the NPV of `cashflows` is zero
///
/// Newton-Raphson from 5%, dropping to bisection over `[-99%, 1000%]` when
/// the derivative vanishes or Newton does not settle. `None` when the flows
/// never change sign or bisection finds no bracket.
///
/// Strategies A and C invest their proceeds before t=0, so their sequences
/// open with 0 and the rate compares the terminal value against rent paid,
/// not against an outlay. Only B's rate reads as a return on capital.
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    const TOLERANCE: f64 = 1e-10;

    if cashflows.iter().all(|cf| cf.abs() < TOLERANCE) {
        return if cashflows.is_empty() { None } else { Some(0.0) };
    }
    let has_inflow = cashflows.iter().any(|&cf| cf > TOLERANCE);
    let has_outflow = cashflows.iter().any(|&cf| cf < -TOLERANCE);
    if !(has_inflow && has_outflow) {
        return None;
    }

    let mut rate = 0.05;
    for _ in 0..MAX_ITERATIONS {
        let (value, slope) = npv_with_slope(cashflows, rate);
        if slope.abs() < 1e-20 {
            break;
        }
        let next = (rate - value / slope).clamp(MIN_RATE, MAX_RATE);
        if (next - rate).abs() < TOLERANCE {
            return Some(next);
        }
        rate = next;
    }

    bisect_irr(cashflows, TOLERANCE)
}

const MIN_RATE: f64 = -0.99;
const MAX_RATE: f64 = 10.0;
const MAX_ITERATIONS: usize = 1000;

/// NPV at `rate` and its derivative with respect to `rate`
fn npv_with_slope(cashflows: &[f64], rate: f64) -> (f64, f64) {
    cashflows
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(value, slope), (t, &cf)| {
            let discount = (1.0 + rate).powi(t as i32);
            (value + cf / discount, slope - t as f64 * cf / (discount * (1.0 + rate)))
        })
}

fn bisect_irr(cashflows: &[f64], tolerance: f64) -> Option<f64> {
    let (mut low, mut high) = (MIN_RATE, MAX_RATE);
    let mut npv_low = npv_at_rate(cashflows, low);
    if npv_low * npv_at_rate(cashflows, high) > 0.0 {
        return None;
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = npv_at_rate(cashflows, mid);
        if npv_mid.abs() < tolerance || (high - low) / 2.0 < tolerance {
            return Some(mid);
        }
        if npv_mid * npv_low < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    None
}

/// NPV at a decimal annual rate
fn npv_at_rate(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_is_plain_sum() {
        let cashflows = [-628_500.0, -40_000.0, -41_000.0, 900_000.0];
        assert_eq!(npv(&cashflows, 0.0), cashflows.iter().sum::<f64>());
    }

    #[test]
    fn test_first_entry_undiscounted() {
        assert_eq!(npv(&[-1_000.0], 12.0), -1_000.0);
    }

    #[test]
    fn test_discounting() {
        // 110 received one year out at 10% is worth 100 today
        assert_relative_eq!(npv(&[0.0, 110.0], 10.0), 100.0, max_relative = 1e-12);
        assert_relative_eq!(npv(&[0.0, 0.0, 121.0], 10.0), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_simple_irr() {
        let irr = calculate_irr(&[-1000.0, 1100.0]).unwrap();
        assert!((irr - 0.10).abs() < 1e-6, "Expected ~10% IRR, got {}", irr);
    }

    #[test]
    fn test_irr_zeroes_npv() {
        let cashflows = [-500_000.0, -30_000.0, -31_000.0, -32_000.0, 700_000.0];
        let irr = calculate_irr(&cashflows).unwrap();
        assert!(npv(&cashflows, irr * 100.0).abs() < 1.0);
    }

    #[test]
    fn test_no_sign_change() {
        assert!(calculate_irr(&[-100.0, -50.0]).is_none());
        assert!(calculate_irr(&[]).is_none());
        assert_eq!(calculate_irr(&[0.0, 0.0]), Some(0.0));
    }

    #[test]
    fn test_rent_only_flows_have_a_rate() {
        // Zero at t=0, rent outflows, then a terminal value
        let cashflows = [0.0, -50_000.0, -51_500.0, 400_000.0];
        let irr = calculate_irr(&cashflows).unwrap();
        assert!(npv(&cashflows, irr * 100.0).abs() < 1.0);
    }
}
