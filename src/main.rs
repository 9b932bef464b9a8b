//! squatscan - Edit-distance typosquatting candidate finder.
//!
//! CLI entry point.

use clap::Parser;
use squatscan::filters::levenshtein;
use squatscan::{Commands, Config, DistanceConfig, ScanConfig, Scanner};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let config = Config::parse();

    // Set up logging
    let filter = if config.verbose {
        EnvFilter::new("squatscan=debug,info")
    } else {
        EnvFilter::new("squatscan=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let outcome = match config.command.clone() {
        Commands::Scan(scan_config) => run_scan(scan_config, &config),
        Commands::Distance(distance_config) => run_distance(distance_config),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(code) => code,
    }
}

fn run_scan(scan_config: ScanConfig, global_config: &Config) -> Result<(), ExitCode> {
    let scanner = match Scanner::new(scan_config.clone()) {
        Ok(s) => s.with_verbose(global_config.verbose),
        Err(e) => {
            error!("Failed to create scanner: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    if !scan_config.json && !scan_config.quiet {
        print_banner();
    }

    let report = match scanner.run() {
        Ok(r) => r,
        Err(e) => {
            error!("Scan failed: {}", e);
            return Err(ExitCode::FAILURE);
        }
    };

    if let Some(ref output_path) = scan_config.output {
        if let Err(e) = report.write_json(output_path) {
            error!("Failed to write output file: {}", e);
            return Err(ExitCode::FAILURE);
        }
        info!("Results written to: {:?}", output_path);
        if scan_config.json {
            return Ok(());
        }
    }

    scanner.print_report(&report);

    Ok(())
}

fn run_distance(distance_config: DistanceConfig) -> Result<(), ExitCode> {
    println!(
        "{}",
        levenshtein(&distance_config.first, &distance_config.second)
    );
    Ok(())
}

fn print_banner() {
    println!();
    println!("\x1b[36m╔══════════════════════════════════════════════════════════════╗\x1b[0m");
    println!("\x1b[36m║                    SQUATSCAN v0.1.0                          ║\x1b[0m");
    println!("\x1b[36m║           Typosquatting Candidate Finder                     ║\x1b[0m");
    println!("\x1b[36m╚══════════════════════════════════════════════════════════════╝\x1b[0m");
    println!();
}
