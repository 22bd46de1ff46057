//! # Emissions Calculation
//!
//! Estimates the carbon footprint of a print job and compares it with a
//! fixed worst-case job of the same size.
//!
//! ## Method
//!
//! ```text
//! base       = area × (material + ink)
//! adjusted   = base + base × disposal_offset
//! baseline   = area × (Foam Board + UV)
//! saved      = baseline − adjusted
//! distance   = adjusted × 3.6 km/kg
//! ```
//!
//! The baseline is always treated as landfilled: the user's disposal offset
//! is applied to their own job only.
//!
//! ## Assumptions
//!
//! - Area has already been sanitized by the caller (see [`crate::input`]).
//!   A negative area is not rejected here.
//! - No rounding. Presentation decides on decimal places.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::calculations::emissions::{calculate, EmissionsInput};
//! use impact_core::units::SquareMeters;
//!
//! let input = EmissionsInput {
//!     material: "Recycled Polyester".to_string(),
//!     ink: "Latex".to_string(),
//!     area_m2: SquareMeters(10.0),
//!     disposal: "Recycled".to_string(),
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!((result.adjusted_emissions.0 - 8.58).abs() < 1e-9);
//! assert!((result.saved_emissions.0 - 22.12).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::{reference_data, Category, ReferenceDataset};
use crate::errors::ImpactResult;
use crate::units::{KgCo2e, Kilometers, SquareMeters};

/// Material of the worst-case comparison job
pub const BASELINE_MATERIAL: &str = "Foam Board";

/// Ink of the worst-case comparison job
pub const BASELINE_INK: &str = "UV";

/// Input parameters for a print job estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "material": "Recycled Polyester",
///   "ink": "Latex",
///   "area_m2": 10.0,
///   "disposal": "Recycled"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmissionsInput {
    /// Print media, a key of the materials table
    pub material: String,

    /// Ink system, a key of the inks table
    pub ink: String,

    /// Printed area
    pub area_m2: SquareMeters,

    /// End-of-life handling, a key of the disposal table
    pub disposal: String,
}

impl Default for EmissionsInput {
    fn default() -> Self {
        EmissionsInput {
            material: "Recycled Polyester".to_string(),
            ink: "Latex".to_string(),
            area_m2: SquareMeters(0.0),
            disposal: "Recycled".to_string(),
        }
    }
}

/// Results from an emissions estimate.
///
/// ## JSON Example
///
/// ```json
/// {
///   "base_emissions": 14.3,
///   "adjusted_emissions": 8.58,
///   "baseline_emissions": 30.7,
///   "saved_emissions": 22.12,
///   "distance_equivalent": 30.888
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionsResult {
    /// Emissions of media and ink before the disposal offset
    pub base_emissions: KgCo2e,

    /// Emissions after the disposal offset
    pub adjusted_emissions: KgCo2e,

    /// Emissions of the same area printed as Foam Board + UV, landfilled
    pub baseline_emissions: KgCo2e,

    /// Baseline minus adjusted emissions (negative if worse than baseline)
    pub saved_emissions: KgCo2e,

    /// Adjusted emissions expressed as kilometers driven
    pub distance_equivalent: Kilometers,
}

/// Estimate emissions against the seed dataset.
///
/// # Returns
///
/// * `Ok(EmissionsResult)` - Calculation results
/// * `Err(ImpactError::UnknownEntry)` - If a selection is not in the dataset
pub fn calculate(input: &EmissionsInput) -> ImpactResult<EmissionsResult> {
    calculate_with(reference_data(), input)
}

/// Estimate emissions against a specific dataset.
///
/// The dataset must contain the baseline entries ("Foam Board", "UV").
pub fn calculate_with(dataset: &ReferenceDataset, input: &EmissionsInput) -> ImpactResult<EmissionsResult> {
    let material = dataset.coefficient(Category::Material, &input.material)?;
    let ink = dataset.coefficient(Category::Ink, &input.ink)?;
    let offset = dataset.coefficient(Category::Disposal, &input.disposal)?;

    let baseline_material = dataset.coefficient(Category::Material, BASELINE_MATERIAL)?;
    let baseline_ink = dataset.coefficient(Category::Ink, BASELINE_INK)?;

    let area = input.area_m2;
    let base_emissions = area * (material + ink);
    let adjusted_emissions = base_emissions + base_emissions * offset;
    let baseline_emissions = area * (baseline_material + baseline_ink);
    let saved_emissions = baseline_emissions - adjusted_emissions;

    debug!(
        material = %input.material,
        ink = %input.ink,
        disposal = %input.disposal,
        area_m2 = area.0,
        adjusted = adjusted_emissions.0,
        "emissions calculated"
    );

    Ok(EmissionsResult {
        base_emissions,
        adjusted_emissions,
        baseline_emissions,
        saved_emissions,
        distance_equivalent: adjusted_emissions.into(),
    })
}

/// Library form of the estimator: names and a bare area in, figures out.
///
/// # Example
///
/// ```rust
/// use impact_core::compute_emissions;
///
/// let result = compute_emissions("Recycled Polyester", "Latex", 10.0, "Landfill").unwrap();
/// assert!((result.adjusted_emissions.0 - 14.3).abs() < 1e-9);
/// assert!((result.saved_emissions.0 - 16.4).abs() < 1e-9);
/// ```
pub fn compute_emissions(material: &str, ink: &str, area: f64, disposal: &str) -> ImpactResult<EmissionsResult> {
    calculate(&EmissionsInput {
        material: material.to_string(),
        ink: ink.to_string(),
        area_m2: SquareMeters(area),
        disposal: disposal.to_string(),
    })
}
