//! Integration tests for the impact-cli binary.
//!
//! These tests use `assert_cmd` to verify:
//! - estimate text and JSON output
//! - area coercion and selection resolution at the command line
//! - sources and options pages
//! - the interactive form fed from stdin

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("impact-cli").expect("binary exists")
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("run impact-cli");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid JSON on stdout")
}

// =============================================================================
// estimate
// =============================================================================

#[test]
fn estimate_recycled_polyester_recycled() {
    cli()
        .args([
            "estimate",
            "--material",
            "Recycled Polyester",
            "--ink",
            "Latex",
            "--area",
            "10",
            "--disposal",
            "Recycled",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Emissions: 8.58 kg CO₂e"))
        .stdout(predicate::str::contains("CO₂ Saved vs Traditional: 22.12 kg CO₂e"))
        .stdout(predicate::str::contains("Equivalent to: 30.9 km driven"));
}

#[test]
fn estimate_landfill() {
    cli()
        .args(["estimate", "--area", "10", "--disposal", "landfill"])
        .assert()
        .success()
        .stdout(predicate::str::contains("End-of-Life Handling: Landfill"))
        .stdout(predicate::str::contains("Total Emissions: 14.30 kg CO₂e"))
        .stdout(predicate::str::contains("CO₂ Saved vs Traditional: 16.40 kg CO₂e"));
}

#[test]
fn estimate_defaults_to_zero_area() {
    cli()
        .arg("estimate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Media Type: Recycled Polyester"))
        .stdout(predicate::str::contains("Total Emissions: 0.00 kg CO₂e"))
        .stdout(predicate::str::contains("Equivalent to: 0.0 km driven"));
}

#[test]
fn estimate_coerces_bad_area() {
    for area in ["abc", "-5"] {
        cli()
            .args(["estimate", "--area", area])
            .assert()
            .success()
            .stdout(predicate::str::contains("Area: 0 m²"))
            .stdout(predicate::str::contains("Total Emissions: 0.00 kg CO₂e"));
    }
}

#[test]
fn estimate_json() {
    let json = stdout_json(cli().args([
        "estimate",
        "--material",
        "foam-board",
        "--ink",
        "UV",
        "--area",
        "5",
        "--disposal",
        "Landfill",
        "--json",
    ]));

    assert_eq!(json["input"]["material"], "Foam Board");
    assert_eq!(json["input"]["area_m2"], 5.0);
    let saved = json["result"]["saved_emissions"].as_f64().unwrap();
    assert!(saved.abs() < 1e-9);
    let adjusted = json["result"]["adjusted_emissions"].as_f64().unwrap();
    let distance = json["result"]["distance_equivalent"].as_f64().unwrap();
    assert!((distance - adjusted * 3.6).abs() < 1e-9);
}

#[test]
fn estimate_unknown_material_fails() {
    cli()
        .args(["estimate", "--material", "Cardboard"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cardboard"));
}

#[test]
fn estimate_unknown_json_error() {
    let output = cli()
        .args(["estimate", "--ink", "Gel", "--json"])
        .env("RUST_BACKTRACE", "1")
        .output()
        .expect("run impact-cli");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    // stderr carries only the structured error
    let error: serde_json::Value = serde_json::from_slice(&output.stderr).expect("stderr is JSON");
    assert_eq!(error["code"], "UNKNOWN_ENTRY");
    assert_eq!(error["error"]["details"]["category"], "inks");
    assert_eq!(error["error"]["details"]["name"], "Gel");
}

// =============================================================================
// sources / options
// =============================================================================

#[test]
fn sources_page() {
    cli()
        .arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sources & Methodology"))
        .stdout(predicate::str::contains("- Foam Board: PVC Material Carbon Footprint Study"))
        .stdout(predicate::str::contains("- Landfill Disposal: IPCC Waste Emissions Guidelines"));
}

#[test]
fn sources_json() {
    let json = stdout_json(cli().args(["sources", "--json"]));
    let materials = json["materials"].as_array().unwrap();
    assert_eq!(materials.len(), 5);
    assert_eq!(materials[0]["name"], "ReBoard");
    assert_eq!(json["disposal"][2]["coefficient"], -0.7);
}

#[test]
fn options_json() {
    let json = stdout_json(cli().args(["options", "--json"]));
    assert_eq!(json["inks"], serde_json::json!(["Latex", "UV", "Solvent"]));
    assert_eq!(json["disposal"], serde_json::json!(["Recycled", "Landfill", "Reused"]));
}

// =============================================================================
// interactive form
// =============================================================================

#[test]
fn interactive_form() {
    // material 4 = Recycled Polyester, ink by name, area, disposal 2 = Landfill, then sources
    cli()
        .write_stdin("4\nlatex\n10\n2\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Emissions: 14.30 kg CO₂e"))
        .stdout(predicate::str::contains("Sources & Methodology"));
}

#[test]
fn interactive_defaults_on_empty_input() {
    cli()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Media Type: Recycled Polyester"))
        .stdout(predicate::str::contains("Total Emissions: 0.00 kg CO₂e"))
        .stdout(predicate::str::contains("Sources & Methodology").not());
}
