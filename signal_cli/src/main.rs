//! # Greenwave CLI Application
//!
//! Terminal surface for the submission workflow: pass four intersection
//! images on the command line, get the recommended signal timings back.
//! Shares all contract logic (validation, upload, interpretation) with the
//! GUI via signal_core.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use signal_core::{
    submit, AnalysisEndpoint, HttpAnalysisClient, ImageSelection, Outcome, TimingReport,
    DEFAULT_BASE_URL,
};

#[derive(Parser)]
#[command(
    name = "greenwave",
    about = "Submit four intersection images for AI signal timing optimization"
)]
struct Args {
    /// Image files, one per approach, in north/south/west/east order
    #[arg(value_name = "IMAGE")]
    images: Vec<PathBuf>,

    /// Base URL of the analysis endpoint
    #[arg(long, env = "GREENWAVE_ENDPOINT", default_value = DEFAULT_BASE_URL)]
    endpoint: String,

    /// Print the raw analysis result as JSON instead of the formatted report
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let selection = match ImageSelection::load_from_paths(&args.images) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    let client = match HttpAnalysisClient::new(AnalysisEndpoint::new(&args.endpoint)) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    match submit(&client, &selection).await {
        Outcome::Success(result) => {
            if args.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&TimingReport::from_result(&result));
            }
            ExitCode::SUCCESS
        }
        Outcome::Failure(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &TimingReport) {
    println!("═══════════════════════════════════════");
    println!("  OPTIMIZED SIGNAL TIMINGS");
    println!("═══════════════════════════════════════");
    println!();
    for row in &report.rows {
        println!(
            "  {:<6} {:>3} s{}",
            row.direction.display_name(),
            row.seconds,
            if row.ambulance { "  [AMBULANCE]" } else { "" }
        );
    }
    if report.ambulance_detected {
        println!();
        println!("  Emergency vehicle detected - flagged lanes get priority");
    }
    println!();
    println!("═══════════════════════════════════════");
}
