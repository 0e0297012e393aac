//! Downsizing Analyzer - deterministic projection engine for relocation strategies
//!
//! This library provides:
//! - Sale settlement of the current home (costs, equity, capital gains)
//! - Year-by-year projection of three strategies: sell & rent, sell & buy
//!   smaller, and rent with half the proceeds invested
//! - Monthly mortgage amortization for the buy-smaller strategy
//! - NPV ranking with terminal liquidation value
//! - Batch and sensitivity runs across threads

pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{InputError, Inputs};
pub use projection::{simulate, Projection, ProjectionConfig, ProjectionEngine, ScenarioResult, Strategy, YearRecord};
pub use scenario::{ScenarioRunner, SweepParam};
