//! # Impact Portal CLI
//!
//! Terminal front end for print job emissions estimates.
//!
//! - `impact-cli estimate` - estimate from flags
//! - `impact-cli sources` - sources & methodology
//! - `impact-cli options` - selectable media, inks and disposal methods
//! - `impact-cli` - interactive form

mod output;
mod prompt;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use impact_core::dataset::ReferenceDataset;
use impact_core::input::EstimateRequest;
use impact_core::{calculate, reference_data, EmissionsInput, ImpactError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Print job carbon-footprint estimates")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the emissions of a print job.
    Estimate {
        /// Print media.
        #[arg(long, default_value = "Recycled Polyester")]
        material: String,
        /// Ink system.
        #[arg(long, default_value = "Latex")]
        ink: String,
        /// Printed area in m². Anything that is not a non-negative number counts as 0.
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        area: String,
        /// End-of-life handling.
        #[arg(long, default_value = "Recycled")]
        disposal: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Show the sources behind every coefficient.
    Sources {
        /// Emit the reference dataset as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List the selectable entries of each category.
    Options {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// The two pages of the portal
#[derive(Debug, Clone, Copy, PartialEq)]
enum View<'a> {
    Estimate(&'a EmissionsInput),
    Sources,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = reference_data();

    match cli.command {
        None => handle_interactive(dataset),
        Some(Command::Estimate {
            material,
            ink,
            area,
            disposal,
            json,
        }) => {
            let request = EstimateRequest {
                material,
                ink,
                area,
                disposal,
            };
            handle_estimate(dataset, &request, json)
        }
        Some(Command::Sources { json }) => handle_sources(dataset, json),
        Some(Command::Options { json }) => handle_options(dataset, json),
    }
}

fn handle_estimate(dataset: &ReferenceDataset, request: &EstimateRequest, json: bool) -> Result<()> {
    let input = request
        .resolve(dataset)
        .map_err(|e| report_error(e, json))
        .context("invalid selection")?;
    show(View::Estimate(&input), dataset, json)
}

fn handle_sources(dataset: &ReferenceDataset, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(dataset)?);
        return Ok(());
    }
    show(View::Sources, dataset, false)
}

fn handle_options(dataset: &ReferenceDataset, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&output::options_json(dataset))?);
    } else {
        print!("{}", output::render_options(dataset));
    }
    Ok(())
}

fn handle_interactive(dataset: &ReferenceDataset) -> Result<()> {
    println!("{}", output::heading(output::TITLE));
    let input = prompt::fill_form(dataset, &EmissionsInput::default());
    show(View::Estimate(&input), dataset, false)?;

    if prompt::confirm("See full source list?") {
        println!();
        show(View::Sources, dataset, false)?;
    }
    Ok(())
}

fn show(view: View<'_>, dataset: &ReferenceDataset, json: bool) -> Result<()> {
    match view {
        View::Estimate(input) => {
            let result = calculate(input).map_err(|e| report_error(e, json))?;
            if json {
                let report = output::EstimateReport {
                    input,
                    result: &result,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", output::render_estimate(dataset, input, &result));
            }
        }
        View::Sources => print!("{}", output::render_sources(dataset)),
    }
    Ok(())
}

/// In JSON mode, print the structured error as the only stderr output and
/// exit; otherwise hand the error back for anyhow to report.
fn report_error(e: ImpactError, json: bool) -> ImpactError {
    if json {
        eprintln!("{}", error_json(&e));
        std::process::exit(1);
    }
    e
}

fn error_json(e: &ImpactError) -> serde_json::Value {
    serde_json::json!({ "code": e.error_code(), "error": e })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_json_payload() {
        let payload = error_json(&ImpactError::unknown_entry("inks", "Gel"));
        assert_eq!(payload["code"], "UNKNOWN_ENTRY");
        assert_eq!(payload["error"]["type"], "UnknownEntry");
        assert_eq!(payload["error"]["details"]["name"], "Gel");
    }

    #[test]
    fn test_cli_parses_estimate_flags() {
        let cli = Cli::try_parse_from(["impact-cli", "estimate", "--area", "-5", "--json"]).unwrap();
        match cli.command {
            Some(Command::Estimate { area, json, material, .. }) => {
                assert_eq!(area, "-5");
                assert!(json);
                assert_eq!(material, "Recycled Polyester");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
