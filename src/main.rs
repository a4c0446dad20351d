use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use pagesim::report::{write_reports, ReportFormat};
use pagesim::{run_with_config, PolicyKind, SimulationConfig, Trace, TraceOptions};

#[derive(Parser)]
#[command(author, version, about = "pagesim - simulate FIFO, Optimal and LRU page replacement over a reference trace")]
struct Cli {
    /// Trace file: page count, frame count, request count, then the requests
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Report destination, `-` for stdout
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Policies to run, in order (defaults to fifo, optimal, lru)
    #[arg(short, long = "policy", value_enum)]
    policies: Vec<PolicyKind>,

    /// Reject page ids outside of [0, page count)
    #[arg(long)]
    strict_pages: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = TraceOptions {
        strict_pages: cli.strict_pages,
    };
    let trace = Trace::from_file(&cli.input, options)
        .with_context(|| format!("Failed to load trace from {}", cli.input.display()))?;

    let config = if cli.policies.is_empty() {
        SimulationConfig::default()
    } else {
        SimulationConfig {
            policies: cli.policies.clone(),
        }
    };

    // All runs finish before anything is written
    let reports = run_with_config(&trace.requests, trace.num_frames, &config)?;

    if cli.output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_reports(&mut out, &reports, cli.format).context("Failed to write report")?;
        return Ok(());
    }

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    let mut out = BufWriter::new(file);
    write_reports(&mut out, &reports, cli.format)
        .with_context(|| format!("Failed to write report to {}", cli.output.display()))?;
    out.flush()?;

    for report in &reports {
        println!("{}: {} page faults", report.policy, report.faults);
    }
    println!("Report written to {}", cli.output.display());

    Ok(())
}
