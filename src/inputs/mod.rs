//! Household inputs and JSON loading

mod data;
pub mod loader;

pub use data::{pct, InputError, Inputs};
pub use loader::{load_inputs, load_inputs_from_reader};
