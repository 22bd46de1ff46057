//! Text and JSON rendering for the CLI views.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use impact_core::dataset::{Category, ReferenceDataset};
use impact_core::{EmissionsInput, EmissionsResult};

pub const TITLE: &str = "The Print Factory - Impact Portal";

/// Estimate view payload for `--json`
#[derive(Debug, Serialize)]
pub struct EstimateReport<'a> {
    pub input: &'a EmissionsInput,
    pub result: &'a EmissionsResult,
}

pub fn heading(title: &str) -> String {
    format!("{}\n{}\n", title, "=".repeat(title.chars().count()))
}

/// Results card: selections with their descriptions, then the three figures.
pub fn render_estimate(dataset: &ReferenceDataset, input: &EmissionsInput, result: &EmissionsResult) -> String {
    let mut out = heading(TITLE);
    out.push('\n');

    let selections = [
        (Category::Material, &input.material),
        (Category::Ink, &input.ink),
        (Category::Disposal, &input.disposal),
    ];
    for (category, name) in selections {
        let _ = writeln!(out, "{}: {}", category.label(), name);
        if let Ok(entry) = dataset.get(category, name) {
            let _ = writeln!(out, "    {}", entry.description);
        }
    }
    let _ = writeln!(out, "Area: {}", input.area_m2);
    out.push('\n');

    let _ = writeln!(out, "Total Emissions: {:.2}", result.adjusted_emissions);
    let _ = writeln!(out, "CO₂ Saved vs Traditional: {:.2}", result.saved_emissions);
    let _ = writeln!(out, "Equivalent to: {:.1} driven", result.distance_equivalent);
    out.push('\n');
    out.push_str("Based on 3rd party environmental declarations.\n");
    out.push_str("See the full source list with `impact-cli sources`.\n");
    out
}

fn source_label(category: Category, name: &str) -> String {
    match category {
        Category::Material => name.to_string(),
        Category::Ink => format!("{} Ink", name),
        Category::Disposal => format!("{} Disposal", name),
    }
}

/// Sources & Methodology page
pub fn render_sources(dataset: &ReferenceDataset) -> String {
    let mut out = heading("Sources & Methodology");
    out.push('\n');
    for category in Category::ALL {
        for entry in dataset.entries(category) {
            let _ = writeln!(out, "- {}: {}", source_label(category, &entry.name), entry.source);
            let _ = writeln!(out, "    {}", entry.description);
        }
    }
    out
}

/// Selectable names per category, as a selector would list them
pub fn render_options(dataset: &ReferenceDataset) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let _ = writeln!(out, "{} ({})", category.label(), category.key());
        for entry in dataset.entries(category) {
            let coefficient = match category {
                Category::Disposal => format!("{:+.0}%", entry.coefficient * 100.0),
                Category::Material | Category::Ink => format!("{} kg CO₂e/m²", entry.coefficient),
            };
            let _ = writeln!(out, "  {:<20} {}", entry.name, coefficient);
        }
        out.push('\n');
    }
    out
}

pub fn options_json(dataset: &ReferenceDataset) -> BTreeMap<&'static str, Vec<&str>> {
    Category::ALL
        .iter()
        .map(|&category| (category.key(), dataset.names(category).collect()))
        .collect()
}
