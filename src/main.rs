//! Command-line front end: reads a mission file and prints one line per rover.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use mars_rover_sim::Simulation;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mars-rover-sim",
    version,
    about = "Run rover missions on a bounded grid"
)]
struct Cli {
    /// Path of the file containing rover instructions.
    #[arg(short, long)]
    input: PathBuf,

    /// Print the full report as JSON instead of result lines.
    #[arg(long)]
    json: bool,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let instructions = fs::read_to_string(&cli.input)
        .with_context(|| format!("unable to read file {}", cli.input.display()))?;

    let report = Simulation::default()
        .run(&instructions)
        .context("simulation failed")?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        for line in report.lines() {
            println!("{line}");
        }
    }
    Ok(())
}
