//! # Reference Dataset
//!
//! Named coefficient tables for the three things a print job is priced on:
//! the media it is printed on, the ink, and what happens to it afterwards.
//!
//! ## Categories
//!
//! - **Materials**: emission factor in kg CO₂e per m² of media
//! - **Inks**: emission factor in kg CO₂e per m² printed
//! - **Disposal**: signed offset fraction applied to the job's emissions
//!
//! The seed values live in [`seed`] and are exposed through
//! [`reference_data`], a process-wide read-only instance built on first use.
//!
//! ## Example
//!
//! ```rust
//! use impact_core::dataset::{reference_data, Category};
//!
//! let data = reference_data();
//! let reboard = data.get(Category::Material, "ReBoard").unwrap();
//! assert_eq!(reboard.coefficient, 1.1);
//!
//! // Typed input is matched loosely onto canonical names
//! let uv = data.resolve(Category::Ink, "  uv ").unwrap();
//! assert_eq!(uv.name, "UV");
//! ```

pub mod seed;

pub use seed::reference_data;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{ImpactError, ImpactResult};

/// The three independent tables of the reference dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Print media (substrate)
    Material,
    /// Ink system
    Ink,
    /// End-of-life handling
    Disposal,
}

impl Category {
    /// All categories, in form order
    pub const ALL: [Category; 3] = [Category::Material, Category::Ink, Category::Disposal];

    /// Table key used in JSON and error messages
    pub fn key(&self) -> &'static str {
        match self {
            Category::Material => "materials",
            Category::Ink => "inks",
            Category::Disposal => "disposal",
        }
    }

    /// Form label for the selector populated from this table
    pub fn label(&self) -> &'static str {
        match self {
            Category::Material => "Media Type",
            Category::Ink => "Ink Type",
            Category::Disposal => "End-of-Life Handling",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// One named entry in a category table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Unique key within its category (e.g., "Foam Board")
    pub name: String,
    /// Emission factor (kg CO₂e/m²) for materials and inks, offset fraction for disposal
    pub coefficient: f64,
    /// Short explanation shown next to the selection
    pub description: String,
    /// Third-party declaration the coefficient is taken from
    pub source: String,
}

impl ReferenceEntry {
    /// Create an entry from its name, coefficient, description and citation
    pub fn new(
        name: impl Into<String>,
        coefficient: f64,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        ReferenceEntry {
            name: name.into(),
            coefficient,
            description: description.into(),
            source: source.into(),
        }
    }
}

/// Three ordered name → entry tables.
///
/// Entries keep their insertion order, which is the order selectors list
/// them in. Instances are only handed out after [`ReferenceDataset::validate`]
/// has passed, and there is no mutable access afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceDataset {
    materials: Vec<ReferenceEntry>,
    inks: Vec<ReferenceEntry>,
    disposal: Vec<ReferenceEntry>,
}

impl ReferenceDataset {
    /// Build a dataset from its three tables.
    ///
    /// Fails with `InvalidDataset` if a table is empty, a name repeats
    /// within a table, or a coefficient is not finite.
    pub fn new(
        materials: Vec<ReferenceEntry>,
        inks: Vec<ReferenceEntry>,
        disposal: Vec<ReferenceEntry>,
    ) -> ImpactResult<Self> {
        let dataset = ReferenceDataset {
            materials,
            inks,
            disposal,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the dataset invariants.
    pub fn validate(&self) -> ImpactResult<()> {
        for category in Category::ALL {
            let entries = self.entries(category);
            if entries.is_empty() {
                return Err(ImpactError::invalid_dataset(category.key(), "table is empty"));
            }

            let mut seen = HashSet::new();
            for entry in entries {
                if !seen.insert(entry.name.as_str()) {
                    return Err(ImpactError::invalid_dataset(
                        category.key(),
                        format!("duplicate entry '{}'", entry.name),
                    ));
                }
                if !entry.coefficient.is_finite() {
                    return Err(ImpactError::invalid_dataset(
                        category.key(),
                        format!("coefficient of '{}' is not finite", entry.name),
                    ));
                }
            }
        }
        Ok(())
    }

    /// All entries of a category in seed order
    pub fn entries(&self, category: Category) -> &[ReferenceEntry] {
        match category {
            Category::Material => &self.materials,
            Category::Ink => &self.inks,
            Category::Disposal => &self.disposal,
        }
    }

    /// Key set of a category, for populating selectors
    pub fn names(&self, category: Category) -> impl Iterator<Item = &str> {
        self.entries(category).iter().map(|e| e.name.as_str())
    }

    /// Look up an entry by its exact name.
    pub fn get(&self, category: Category, name: &str) -> ImpactResult<&ReferenceEntry> {
        self.entries(category)
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ImpactError::unknown_entry(category.key(), name))
    }

    /// Coefficient of the named entry.
    pub fn coefficient(&self, category: Category, name: &str) -> ImpactResult<f64> {
        self.get(category, name).map(|e| e.coefficient)
    }

    /// Match free-form input onto an entry.
    ///
    /// Comparison ignores case and surrounding whitespace, and treats `-`,
    /// `_` and spaces alike, so "foam-board" finds "Foam Board".
    pub fn resolve(&self, category: Category, input: &str) -> ImpactResult<&ReferenceEntry> {
        let wanted = normalize(input);
        self.entries(category)
            .iter()
            .find(|e| normalize(&e.name) == wanted)
            .ok_or_else(|| ImpactError::unknown_entry(category.key(), input.trim()))
    }
}

fn normalize(s: &str) -> String {
    s.trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, coefficient: f64) -> ReferenceEntry {
        ReferenceEntry::new(name, coefficient, "", "")
    }

    fn small_dataset() -> ImpactResult<ReferenceDataset> {
        ReferenceDataset::new(
            vec![entry("Board", 1.0)],
            vec![entry("Ink", 0.1)],
            vec![entry("Bin", 0.0)],
        )
    }

    #[test]
    fn test_lookup_by_name() {
        let data = small_dataset().unwrap();
        assert_eq!(data.coefficient(Category::Material, "Board").unwrap(), 1.0);
        assert_eq!(data.get(Category::Ink, "Ink").unwrap().name, "Ink");
    }

    #[test]
    fn test_unknown_entry() {
        let data = small_dataset().unwrap();
        let err = data.get(Category::Disposal, "Compost").unwrap_err();
        assert_eq!(err, ImpactError::unknown_entry("disposal", "Compost"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let data = small_dataset().unwrap();
        assert!(data.get(Category::Material, "board").is_err());
        assert!(data.resolve(Category::Material, "board").is_ok());
    }

    #[test]
    fn test_resolve_separators() {
        let data = ReferenceDataset::new(
            vec![entry("Foam Board", 3.0)],
            vec![entry("UV", 0.07)],
            vec![entry("Landfill", 0.0)],
        )
        .unwrap();

        for input in ["Foam Board", "foam-board", "FOAM_BOARD", "  foam   board "] {
            assert_eq!(data.resolve(Category::Material, input).unwrap().name, "Foam Board");
        }
        assert!(data.resolve(Category::Material, "foamboard").is_err());
        assert!(data.resolve(Category::Material, "").is_err());
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = ReferenceDataset::new(vec![entry("Board", 1.0)], vec![], vec![entry("Bin", 0.0)])
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_DATASET");
        assert!(err.to_string().contains("inks"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = ReferenceDataset::new(
            vec![entry("Board", 1.0), entry("Board", 2.0)],
            vec![entry("Ink", 0.1)],
            vec![entry("Bin", 0.0)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let result = ReferenceDataset::new(
            vec![entry("Board", 1.0)],
            vec![entry("Ink", f64::NAN)],
            vec![entry("Bin", 0.0)],
        );
        assert!(result.is_err());

        let result = ReferenceDataset::new(
            vec![entry("Board", 1.0)],
            vec![entry("Ink", 0.1)],
            vec![entry("Bin", f64::NEG_INFINITY)],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_category_keys() {
        let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["materials", "inks", "disposal"]);
        assert_eq!(Category::Disposal.label(), "End-of-Life Handling");
        assert_eq!(serde_json::to_string(&Category::Ink).unwrap(), "\"ink\"");
    }
}
