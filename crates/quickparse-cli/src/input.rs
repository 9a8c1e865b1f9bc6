//! Reading command input from a file or stdin

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

/// `None` and `-` both mean stdin
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.map_or(true, |p| p == Path::new("-"))
}

pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if !is_stdin(Some(p)) => std::fs::read_to_string(p)
            .context(format!("Failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

pub fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T> {
    // Editors on some platforms save with a byte order mark
    let content = content.trim_start_matches('\u{FEFF}');
    serde_json::from_str(content).context("Input is not valid JSON for this command")
}

pub fn read_json<T: DeserializeOwned>(path: Option<&Path>) -> Result<T> {
    let content = read_text(path)?;
    parse_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickparse_core::{PassRecord, PnrRecord};

    #[test]
    fn test_stdin_markers() {
        assert!(is_stdin(None));
        assert!(is_stdin(Some(Path::new("-"))));
        assert!(!is_stdin(Some(Path::new("chat.txt"))));
    }

    #[test]
    fn test_null_record_decodes_to_none() {
        let record: Option<PassRecord> = parse_json("null").unwrap();
        assert!(record.is_none());

        let record: Option<PnrRecord> = parse_json("\u{FEFF}{\"pnr\":\"1234567890\"}").unwrap();
        assert_eq!(record.unwrap().pnr.as_deref(), Some("1234567890"));
    }

    #[test]
    fn test_malformed_json_has_context() {
        let err = parse_json::<PassRecord>("{name:").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
