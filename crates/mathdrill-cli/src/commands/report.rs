//! The `mathdrill report` command.

use std::path::PathBuf;

use anyhow::Result;

use mathdrill_core::report::SessionReport;
use mathdrill_report::{render, write_report, ReportFormat};

pub fn execute(input: PathBuf, format: String, output: Option<PathBuf>) -> Result<()> {
    let format: ReportFormat = format.parse().map_err(anyhow::Error::msg)?;
    let report = SessionReport::load_json(&input)?;

    match output {
        Some(path) => {
            write_report(&report, format, &path)?;
            eprintln!("{format} report: {}", path.display());
        }
        None => print!("{}", render(&report, format)?),
    }

    Ok(())
}
