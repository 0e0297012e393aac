//! End-to-end projections with the form defaults and hand-checked scenarios

use approx::assert_abs_diff_eq;
use downsizing_analyzer::inputs::load_inputs_from_reader;
use downsizing_analyzer::projection::{monthly_payment, settle_sale};
use downsizing_analyzer::{simulate, Inputs, Strategy};

#[test]
fn test_default_sale_settlement() {
    let inputs = Inputs {
        current_home_value: 1_300_000.0,
        current_mortgage_balance: 0.0,
        selling_costs_pct: 6.0,
        cap_gains_tax_pct: 0.0,
        ..Default::default()
    };
    let projection = simulate(&inputs);

    assert_abs_diff_eq!(projection.selling_costs, 78_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(projection.equity_before_tax, 1_222_000.0, epsilon = 1e-6);
    assert_eq!(projection.capital_gains_tax, 0.0);
    assert_abs_diff_eq!(projection.net_proceeds, 1_222_000.0, epsilon = 1e-6);
    assert_eq!(settle_sale(&inputs).net_proceeds, projection.net_proceeds);
}

#[test]
fn test_buy_smaller_mortgage() {
    let projection = simulate(&Inputs::default());
    let purchase = &projection.purchase;

    assert_abs_diff_eq!(purchase.down_payment, 611_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(purchase.mortgage_principal, 89_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(purchase.monthly_payment, 562.54, epsilon = 0.01);
    assert_eq!(purchase.monthly_payment, monthly_payment(purchase.mortgage_principal, 6.5, 30));
}

#[test]
fn test_default_first_year() {
    let projection = simulate(&Inputs::default());
    let year1 = &projection.yearly_data[0];

    assert_abs_diff_eq!(year1.invest_a, 1_295_320.0, epsilon = 1e-6);
    assert_abs_diff_eq!(year1.out_a, 58_200.0, epsilon = 1e-9);
    assert_abs_diff_eq!(year1.net_worth_a, 1_237_120.0, epsilon = 1e-6);
    assert_abs_diff_eq!(year1.net_worth_b, 1_247_699.06, epsilon = 0.01);
    assert_abs_diff_eq!(year1.net_worth_c, 1_200_460.0, epsilon = 1e-6);
    assert_abs_diff_eq!(year1.home_value, 721_000.0, epsilon = 1e-6);
    assert_abs_diff_eq!(year1.remaining_principal, 88_005.22, epsilon = 0.01);
    assert_abs_diff_eq!(year1.home_costs_b, 32_955.71, epsilon = 0.01);
}

#[test]
fn test_default_horizon_regression() {
    let projection = simulate(&Inputs::default());

    let a = projection.result(Strategy::SellAndRent).unwrap();
    let b = projection.result(Strategy::SellAndBuySmaller).unwrap();
    let c = projection.result(Strategy::RentHalfInvested).unwrap();

    assert_abs_diff_eq!(a.terminal, 2_928_594.11, epsilon = 0.01);
    assert_abs_diff_eq!(b.terminal, 2_490_296.61, epsilon = 0.01);
    assert_abs_diff_eq!(c.terminal, 2_075_297.06, epsilon = 0.01);

    assert_abs_diff_eq!(a.npv, 540_055.61, epsilon = 0.01);
    assert_abs_diff_eq!(b.npv, 58_938.90, epsilon = 0.01);
    assert_abs_diff_eq!(c.npv, 177_761.82, epsilon = 0.01);

    assert_eq!(projection.recommended().unwrap().strategy, Strategy::SellAndRent);
}

#[test]
fn test_repeated_runs_identical() {
    let inputs = Inputs::default();
    let first = serde_json::to_string(&simulate(&inputs)).unwrap();
    for _ in 0..5 {
        assert_eq!(serde_json::to_string(&simulate(&inputs)).unwrap(), first);
    }
}

#[test]
fn test_form_json_record() {
    let json = r#"{
        "currentHomeValue": 1300000,
        "currentMortgageBalance": 0,
        "sellingCostsPct": 6,
        "capGainsTaxPct": 0,
        "smallerHomePrice": 700000,
        "downPaymentFromProceedsPct": 50,
        "mortgageRatePct": 6.5,
        "mortgageYears": 30,
        "years": 15,
        "discountRatePct": 5.5
    }"#;
    let inputs = load_inputs_from_reader(json.as_bytes()).unwrap();

    assert_eq!(inputs, Inputs::default());
    let value = serde_json::to_value(simulate(&inputs)).unwrap();
    assert_eq!(value["yearlyData"].as_array().unwrap().len(), 15);
    assert_eq!(value["results"][0]["label"], "A: Sell & Rent (invest 100%)");
    assert!(value["capitalGainsTax"].is_number());
}

#[test]
fn test_cash_purchase_has_no_mortgage_costs() {
    // Down payment covers the whole price: no principal, no interest
    let inputs = Inputs {
        down_payment_from_proceeds_pct: 700_000.0 / 1_222_000.0 * 100.0,
        ..Default::default()
    };
    let projection = simulate(&inputs);

    for record in &projection.yearly_data {
        assert!(record.remaining_principal < 1e-6);
        assert!(record.interest_paid_b.abs() < 1e-6);
    }
}

#[test]
fn test_overfunded_purchase_net_worth_matches_terminal() {
    // Down payment of 1,222,000 against a 500,000 home
    let inputs = Inputs {
        smaller_home_price: 500_000.0,
        down_payment_from_proceeds_pct: 100.0,
        ..Default::default()
    };
    let projection = simulate(&inputs);

    assert_eq!(projection.purchase.mortgage_principal, 0.0);
    for record in &projection.yearly_data {
        assert_eq!(record.remaining_principal, 0.0);
        assert_eq!(record.interest_paid_b, 0.0);
    }

    let last = projection.yearly_data.last().unwrap();
    let b = projection.result(Strategy::SellAndBuySmaller).unwrap();
    assert_abs_diff_eq!(last.net_worth_b + last.home_costs_b, b.terminal, epsilon = 1e-6);
}
