//! Downsizing Analyzer CLI
//!
//! Command-line interface for running strategy projections and sweeps

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use downsizing_analyzer::inputs::load_inputs;
use downsizing_analyzer::projection::{ProjectionConfig, TerminalTiming};
use downsizing_analyzer::report::{format_currency, write_results_csv, write_yearly_csv};
use downsizing_analyzer::{Inputs, Projection, ProjectionEngine, ScenarioRunner, Strategy, SweepParam};
use log::{info, warn};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "downsizing-analyzer")]
#[command(about = "Compare selling and renting against buying a smaller home", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project all three strategies and rank them by NPV
    Run {
        /// JSON inputs file (missing fields use the defaults)
        #[arg(short, long)]
        inputs: Option<PathBuf>,

        /// Override the horizon in years
        #[arg(long)]
        years: Option<u32>,

        /// Override the NPV discount rate (%)
        #[arg(long)]
        discount_rate: Option<f64>,

        /// Discount the terminal value at the horizon year instead of one year later
        #[arg(long)]
        terminal_at_horizon: bool,

        /// Write year-by-year data to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write per-strategy results to this CSV file
        #[arg(long)]
        results_csv: Option<PathBuf>,

        /// Print the full projection as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Vary one input across values and compare NPVs
    Sweep {
        /// JSON inputs file (missing fields use the defaults)
        #[arg(short, long)]
        inputs: Option<PathBuf>,

        /// Input to vary
        #[arg(short, long, value_enum)]
        param: SweepParam,

        /// Comma-separated values, e.g. 3,4.5,6
        #[arg(short, long, value_delimiter = ',', required = true)]
        values: Vec<f64>,

        /// Discount the terminal value at the horizon year instead of one year later
        #[arg(long)]
        terminal_at_horizon: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            inputs,
            years,
            discount_rate,
            terminal_at_horizon,
            csv,
            results_csv,
            json,
        } => {
            let mut inputs = load_base(inputs.as_deref())?;
            if let Some(years) = years {
                inputs.years = years;
            }
            if let Some(rate) = discount_rate {
                inputs.discount_rate_pct = rate;
            }
            validate(&inputs)?;

            let engine = ProjectionEngine::new(config(terminal_at_horizon));
            let projection = engine.project(&inputs);

            if let Some(path) = csv {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                write_yearly_csv(file, &projection)?;
                info!("Year-by-year data written to {}", path.display());
            }
            if let Some(path) = results_csv {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                write_results_csv(file, &projection)?;
                info!("Results written to {}", path.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&projection)?);
            } else {
                print_projection(&projection);
            }
        }
        Commands::Sweep {
            inputs,
            param,
            values,
            terminal_at_horizon,
        } => {
            let inputs = load_base(inputs.as_deref())?;
            for &value in &values {
                validate(&param.apply(&inputs, value))
                    .with_context(|| format!("sweep value {} is not usable", value))?;
            }

            let runner = ScenarioRunner::with_config(inputs, config(terminal_at_horizon));
            let points = runner.sweep(param, &values);

            println!("{:>10} {:>16} {:>16} {:>16}  Best", format!("{:?}", param), "NPV A", "NPV B", "NPV C");
            println!("{}", "-".repeat(70));
            for point in &points {
                let npv = |s: Strategy| point.projection.result(s).map(|r| r.npv).unwrap_or(f64::NAN);
                let best = point
                    .projection
                    .recommended()
                    .map(|r| r.strategy.key())
                    .unwrap_or('-');
                println!(
                    "{:>10.2} {:>16} {:>16} {:>16}  {}",
                    point.value,
                    format_currency(npv(Strategy::SellAndRent)),
                    format_currency(npv(Strategy::SellAndBuySmaller)),
                    format_currency(npv(Strategy::RentHalfInvested)),
                    best,
                );
            }
        }
    }

    Ok(())
}

fn config(terminal_at_horizon: bool) -> ProjectionConfig {
    ProjectionConfig {
        terminal_timing: if terminal_at_horizon {
            TerminalTiming::AtHorizon
        } else {
            TerminalTiming::AfterHorizon
        },
    }
}

fn load_base(path: Option<&Path>) -> Result<Inputs> {
    match path {
        Some(path) => {
            info!("Loading inputs from {}", path.display());
            load_inputs(path).with_context(|| format!("failed to load {}", path.display()))
        }
        None => Ok(Inputs::default()),
    }
}

fn validate(inputs: &Inputs) -> Result<()> {
    if let Err(e) = inputs.validate() {
        warn!("Rejecting inputs: {}", e);
        return Err(e).context("invalid inputs");
    }
    Ok(())
}

fn print_projection(projection: &Projection) {
    println!("Downsize vs. Rent - Financial Analysis");
    println!("======================================\n");

    println!("Sale of current home:");
    println!("  Selling costs:      {:>14}", format_currency(projection.selling_costs));
    println!("  Equity before tax:  {:>14}", format_currency(projection.equity_before_tax));
    println!("  Capital gains tax:  {:>14}", format_currency(projection.capital_gains_tax));
    println!("  Net proceeds:       {:>14}", format_currency(projection.net_proceeds));
    println!();

    let purchase = &projection.purchase;
    println!("Smaller home purchase (B):");
    println!("  Down payment:       {:>14}", format_currency(purchase.down_payment));
    println!("  Closing costs:      {:>14}", format_currency(purchase.closing_costs));
    println!("  Mortgage principal: {:>14}", format_currency(purchase.mortgage_principal));
    println!("  Monthly payment:    {:>14.2}", purchase.monthly_payment);
    println!();

    println!("{:>4} {:>14} {:>14} {:>14} {:>14} {:>14} {:>12} {:>12} {:>12}",
        "Year", "NetWorth A", "NetWorth B", "NetWorth C", "Home Value", "Mortgage Bal",
        "Out A", "Home Costs B", "Out C");
    println!("{}", "-".repeat(118));
    for row in &projection.yearly_data {
        println!("{:>4} {:>14} {:>14} {:>14} {:>14} {:>14} {:>12} {:>12} {:>12}",
            row.year,
            format_currency(row.net_worth_a),
            format_currency(row.net_worth_b),
            format_currency(row.net_worth_c),
            format_currency(row.home_value),
            format_currency(row.remaining_principal),
            format_currency(row.out_a),
            format_currency(row.home_costs_b),
            format_currency(row.out_c),
        );
    }
    println!();

    let summary = projection.summary();
    println!("Totals over {} years:", summary.total_years);
    println!("  Outflows A:         {:>14}", format_currency(summary.total_outflow_a));
    println!("  Home costs B:       {:>14}", format_currency(summary.total_outflow_b));
    println!("  Outflows C:         {:>14}", format_currency(summary.total_outflow_c));
    println!("  Mortgage interest:  {:>14}", format_currency(summary.total_interest_b));
    println!();

    println!("Results:");
    for result in &projection.results {
        let marker = if summary.recommended == Some(result.strategy) { "  <- recommended" } else { "" };
        let irr = result
            .irr
            .map(|irr| format!("{:.2}%", irr * 100.0))
            .unwrap_or_else(|| "n/a".to_string());
        println!("  {:<38} NPV {:>14}  Terminal {:>14}  IRR {:>8}{}",
            result.label,
            format_currency(result.npv),
            format_currency(result.terminal),
            irr,
            marker,
        );
    }
}
