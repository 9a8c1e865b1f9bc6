//! PNR command - summarise a reservation status record

use anyhow::{bail, Result};
use quickparse_core::{try_process_pnr, PnrRecord};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::input;
use crate::output::{human, json, minimal};

pub fn run(config: &Config, path: Option<&Path>) -> Result<()> {
    let record: Option<PnrRecord> = input::read_json(path)?;
    let Some(record) = record else {
        bail!("No PNR record given");
    };

    let report = match try_process_pnr(&record) {
        Ok(report) => report,
        Err(e) => bail!("PNR record rejected: {}", e),
    };
    tracing::info!(
        pnr = %report.pnr_formatted,
        passengers = report.summary.total_passengers,
        chart_prepared = report.chart_prepared,
        "PNR processed"
    );

    match config.effective_format() {
        OutputFormat::Human => println!("{}", human::format_pnr_report(&report)),
        OutputFormat::Json => println!("{}", json::format_value(&report, config.pretty)?),
        OutputFormat::Minimal => println!("{}", minimal::format_pnr_report(&report)),
    }

    Ok(())
}
