//! # Input Boundary
//!
//! Turns raw form values into an [`EmissionsInput`] the calculator can trust.
//!
//! - Area is coerced, never rejected: anything that is not a finite,
//!   non-negative number becomes 0.
//! - Selections are resolved onto canonical dataset keys. An unknown
//!   selection is an `UnknownEntry` error and never reaches the calculator.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::dataset::reference_data;
//! use impact_core::input::{coerce_area, EstimateRequest};
//!
//! assert_eq!(coerce_area("12.5"), 12.5);
//! assert_eq!(coerce_area("abc"), 0.0);
//!
//! let request = EstimateRequest {
//!     material: "foam board".to_string(),
//!     ink: "uv".to_string(),
//!     area: "-4".to_string(),
//!     disposal: "LANDFILL".to_string(),
//! };
//! let input = request.resolve(reference_data()).unwrap();
//! assert_eq!(input.material, "Foam Board");
//! assert_eq!(input.area_m2.0, 0.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::EmissionsInput;
use crate::dataset::{Category, ReferenceDataset};
use crate::errors::ImpactResult;
use crate::units::SquareMeters;

/// Clamp an area to a usable value: non-finite or negative becomes 0.
pub fn sanitize_area(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parse a typed area the way a browser number field is read.
///
/// Surrounding whitespace is ignored and the longest leading numeric prefix
/// is used, so "12.5 m2" reads as 12.5. The result goes through
/// [`sanitize_area`].
pub fn coerce_area(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let parsed = leading_number(trimmed);

    match parsed {
        Some(value) => {
            let area = sanitize_area(value);
            if area != value && value != 0.0 {
                warn!(input = %trimmed, "area out of range, using 0");
            }
            area
        }
        None => {
            if !trimmed.is_empty() {
                warn!(input = %trimmed, "area is not a number, using 0");
            }
            0.0
        }
    }
}

/// Parse the longest prefix shaped like `[+-]digits[.digits][(e|E)[+-]digits]`.
fn leading_number(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when it has digits
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Raw form values, as typed or selected by a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Print media name, matched loosely
    pub material: String,
    /// Ink name, matched loosely
    pub ink: String,
    /// Area in m² as typed
    pub area: String,
    /// End-of-life handling name, matched loosely
    pub disposal: String,
}

impl EstimateRequest {
    /// Resolve selections onto canonical keys and coerce the area.
    pub fn resolve(&self, dataset: &ReferenceDataset) -> ImpactResult<EmissionsInput> {
        let material = dataset.resolve(Category::Material, &self.material)?;
        let ink = dataset.resolve(Category::Ink, &self.ink)?;
        let disposal = dataset.resolve(Category::Disposal, &self.disposal)?;

        Ok(EmissionsInput {
            material: material.name.clone(),
            ink: ink.name.clone(),
            area_m2: SquareMeters(coerce_area(&self.area)),
            disposal: disposal.name.clone(),
        })
    }
}
