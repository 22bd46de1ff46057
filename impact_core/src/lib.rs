//! # impact_core - Print Job Emissions Engine
//!
//! `impact_core` estimates the carbon footprint of a print job from its media,
//! ink, printed area and end-of-life handling, and compares it with a fixed
//! worst-case job. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Read-only data**: One seed dataset, built once, never mutated
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use impact_core::compute_emissions;
//!
//! let result = compute_emissions("Recycled Polyester", "Latex", 10.0, "Recycled").unwrap();
//! println!("{:.2}", result.adjusted_emissions);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("saved_emissions"));
//! ```
//!
//! ## Modules
//!
//! - [`dataset`] - Reference coefficients for materials, inks and disposal
//! - [`calculations`] - The emissions estimate
//! - [`input`] - Coercion and resolution of raw form values
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod dataset;
pub mod errors;
pub mod input;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, compute_emissions, EmissionsInput, EmissionsResult};
pub use dataset::{reference_data, Category, ReferenceDataset, ReferenceEntry};
pub use errors::{ImpactError, ImpactResult};
