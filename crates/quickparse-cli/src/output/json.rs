//! JSON output formatting

use anyhow::Result;
use serde::Serialize;

/// Serialize any report type, optionally pretty-printed
pub fn format_value<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Pass rendering result, valid or not
pub fn format_pass(
    pass: Option<&quickparse_core::Pass>,
    rendered: &str,
    pretty: bool,
) -> Result<String> {
    let output = match pass {
        Some(pass) => serde_json::json!({
            "valid": true,
            "pass": pass,
            "rendered": rendered,
        }),
        None => serde_json::json!({
            "valid": false,
            "rendered": rendered,
        }),
    };
    format_value(&output, pretty)
}
