//! Pass command - render a local train pass

use anyhow::Result;
use quickparse_core::{build_pass, format_pass, PassRecord, INVALID_PASS};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::input;
use crate::output::{colors, json};

pub fn run(config: &Config, path: Option<&Path>) -> Result<()> {
    let record: Option<PassRecord> = input::read_json(path)?;
    let rendered = format_pass(record.as_ref());
    let pass = record.as_ref().and_then(|r| match build_pass(r) {
        Ok(pass) => Some(pass),
        Err(e) => {
            tracing::warn!(error = %e, "pass record rejected");
            None
        }
    });

    match config.effective_format() {
        OutputFormat::Human => {
            if pass.is_some() {
                println!("{}", rendered);
            } else {
                eprintln!("{}", colors::error(INVALID_PASS));
            }
        }
        OutputFormat::Json => println!(
            "{}",
            json::format_pass(pass.as_ref(), &rendered, config.pretty)?
        ),
        OutputFormat::Minimal => match &pass {
            Some(pass) => println!("{}", pass.id),
            None => println!("{}", rendered),
        },
    }

    if pass.is_none() {
        std::process::exit(1);
    }
    Ok(())
}
