use std::io::{self, Write};

use crate::simulation::{PolicyReport, StepEvent};

/// Output formats for simulation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Render reports in the requested format
pub fn write_reports<W: Write>(out: &mut W, reports: &[PolicyReport], format: ReportFormat) -> io::Result<()> {
    match format {
        ReportFormat::Text => write_text_report(out, reports),
        ReportFormat::Json => write_json_report(out, reports),
    }
}

/// Narrate every step of every policy, one section per policy
pub fn write_text_report<W: Write>(out: &mut W, reports: &[PolicyReport]) -> io::Result<()> {
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }

        writeln!(out, "{}", report.policy)?;
        for event in &report.events {
            write_event(out, event)?;
        }
        writeln!(out, "{} page faults", report.faults)?;
    }
    out.flush()
}

fn write_event<W: Write>(out: &mut W, event: &StepEvent) -> io::Result<()> {
    match *event {
        StepEvent::Hit { page, frame } => writeln!(out, "Page {} already in frame {}", page, frame),
        StepEvent::Load { page, frame } => writeln!(out, "Page {} loaded into frame {}", page, frame),
        StepEvent::Replace { evicted, loaded, frame } => writeln!(
            out,
            "Page {} unloaded from frame {}, Page {} loaded into frame {}",
            evicted, frame, loaded, frame
        ),
    }
}

pub fn write_json_report<W: Write>(out: &mut W, reports: &[PolicyReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    out.flush()
}
