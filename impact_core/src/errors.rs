//! # Error Types
//!
//! Structured error types for impact_core. Errors carry enough context for a
//! caller to tell the user which selection or value was rejected, and
//! serialize to JSON for machine consumers.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::errors::{ImpactError, ImpactResult};
//!
//! fn check_ink(name: &str) -> ImpactResult<()> {
//!     if name != "Latex" {
//!         return Err(ImpactError::UnknownEntry {
//!             category: "inks".to_string(),
//!             name: name.to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_ink("Gel").unwrap_err();
//! assert_eq!(err.error_code(), "UNKNOWN_ENTRY");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for impact_core operations
pub type ImpactResult<T> = Result<T, ImpactError>;

/// Structured error type for dataset lookups and emissions calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ImpactError {
    /// A selection names an entry that is not in the reference dataset
    #[error("Unknown {category} entry: '{name}'")]
    UnknownEntry { category: String, name: String },

    /// A reference dataset breaks one of its invariants
    #[error("Invalid dataset ({category}): {reason}")]
    InvalidDataset { category: String, reason: String },
}

impl ImpactError {
    /// Create an UnknownEntry error
    pub fn unknown_entry(category: impl Into<String>, name: impl Into<String>) -> Self {
        ImpactError::UnknownEntry {
            category: category.into(),
            name: name.into(),
        }
    }

    /// Create an InvalidDataset error
    pub fn invalid_dataset(category: impl Into<String>, reason: impl Into<String>) -> Self {
        ImpactError::InvalidDataset {
            category: category.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ImpactError::UnknownEntry { .. } => "UNKNOWN_ENTRY",
            ImpactError::InvalidDataset { .. } => "INVALID_DATASET",
        }
    }
}
