//! Interactive form on stdin/stdout.
//!
//! Every prompt shows its default. Empty input, EOF or an unrecognized
//! answer keeps the default, so the form always completes.

use std::io::{self, BufRead, Write};

use tracing::warn;

use impact_core::dataset::{Category, ReferenceDataset};
use impact_core::input::coerce_area;
use impact_core::units::SquareMeters;
use impact_core::EmissionsInput;

fn read_answer(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Pick an entry by menu number or by name.
pub fn choose(answer: &str, dataset: &ReferenceDataset, category: Category) -> Option<String> {
    let entries = dataset.entries(category);
    if let Ok(n) = answer.parse::<usize>() {
        return n.checked_sub(1).and_then(|i| entries.get(i)).map(|e| e.name.clone());
    }
    dataset.resolve(category, answer).ok().map(|e| e.name.clone())
}

fn prompt_choice(dataset: &ReferenceDataset, category: Category, default: &str) -> String {
    println!("{}:", category.label());
    for (i, entry) in dataset.entries(category).iter().enumerate() {
        println!("  {}) {}", i + 1, entry.name);
    }

    let answer = match read_answer(&format!("Select [{}]: ", default)) {
        Some(a) if !a.is_empty() => a,
        _ => return default.to_string(),
    };
    match choose(&answer, dataset, category) {
        Some(name) => name,
        None => {
            warn!(category = category.key(), answer = %answer, "unrecognized selection, keeping default");
            default.to_string()
        }
    }
}

fn prompt_area(default: f64) -> f64 {
    match read_answer(&format!("Area (m²) [{}]: ", default)) {
        Some(a) if !a.is_empty() => coerce_area(&a),
        _ => default,
    }
}

/// Fill in the estimate form, starting from `defaults`.
pub fn fill_form(dataset: &ReferenceDataset, defaults: &EmissionsInput) -> EmissionsInput {
    let material = prompt_choice(dataset, Category::Material, &defaults.material);
    let ink = prompt_choice(dataset, Category::Ink, &defaults.ink);
    let area = prompt_area(defaults.area_m2.0);
    let disposal = prompt_choice(dataset, Category::Disposal, &defaults.disposal);
    println!();

    EmissionsInput {
        material,
        ink,
        area_m2: SquareMeters(area),
        disposal,
    }
}

/// Yes/no question, defaulting to no.
pub fn confirm(question: &str) -> bool {
    matches!(
        read_answer(&format!("{} [y/N]: ", question)).as_deref(),
        Some("y" | "Y" | "yes" | "Yes")
    )
}
