//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, ImpactError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`emissions`] - Print job emissions against the worst-case baseline

pub mod emissions;

// Re-export commonly used types
pub use emissions::{calculate, calculate_with, compute_emissions, EmissionsInput, EmissionsResult};
