//! Form command - validate a registration form

use anyhow::Result;
use quickparse_core::{validate_form, FormInput};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::input;
use crate::output::{human, json};

pub fn run(config: &Config, path: Option<&Path>) -> Result<()> {
    let form: FormInput = input::read_json(path)?;
    let result = validate_form(&form);
    tracing::info!(valid = result.is_valid, errors = result.errors.len(), "form validated");

    match config.effective_format() {
        OutputFormat::Human => println!("{}", human::format_validation(&result)),
        OutputFormat::Json => println!("{}", json::format_value(&result, config.pretty)?),
        OutputFormat::Minimal => {
            for (field, message) in &result.errors {
                println!("{}: {}", field, message);
            }
        }
    }

    if !result.is_valid {
        std::process::exit(1);
    }
    Ok(())
}
