//! Local train pass rendering

use crate::errors::{CoreError, Result};
use crate::types::{title_case, upper_prefix};
use serde::{Deserialize, Serialize};

/// Returned by [`format_pass`] when the record cannot be rendered
pub const INVALID_PASS: &str = "Invalid pass details";

pub const PASS_TITLE: &str = "MUMBAI LOCAL TRAIN PASS";

const STATION_CODE_LEN: usize = 3;

/// Pass request as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub class_type: Option<String>,
}

impl PassRecord {
    pub fn new(
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        class_type: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            from: Some(from.into()),
            to: Some(to.into()),
            class_type: Some(class_type.into()),
        }
    }
}

/// Travel class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    First,
    Second,
}

impl ClassType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassType::First => "first",
            ClassType::Second => "second",
        }
    }

    /// Leading letter of the pass ID
    pub fn initial(&self) -> char {
        match self {
            ClassType::First => 'F',
            ClassType::Second => 'S',
        }
    }
}

impl std::fmt::Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClassType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(ClassType::First),
            "second" => Ok(ClassType::Second),
            _ => Err(CoreError::InvalidClass(s.to_string())),
        }
    }
}

/// A validated pass, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pass {
    pub id: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub class: ClassType,
}

impl std::fmt::Display for Pass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = [
            PASS_TITLE.to_string(),
            "=".repeat(PASS_TITLE.len()),
            format!("Name: {}", self.name.to_uppercase()),
            format!("From: {}", title_case(&self.from)),
            format!("To: {}", title_case(&self.to)),
            format!("Class: {}", self.class.as_str().to_uppercase()),
            format!("Pass ID: {}", self.id),
        ];
        f.write_str(&lines.join("\n"))
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(CoreError::EmptyField(field))
}

/// Pass ID: class initial, then the first three letters of each station
pub fn pass_id(class: ClassType, from: &str, to: &str) -> String {
    format!(
        "{}{}{}",
        class.initial(),
        upper_prefix(from, STATION_CODE_LEN),
        upper_prefix(to, STATION_CODE_LEN)
    )
}

/// Validate a pass record
pub fn build_pass(record: &PassRecord) -> Result<Pass> {
    let name = required(&record.name, "name")?;
    let from = required(&record.from, "from")?;
    let to = required(&record.to, "to")?;
    let class: ClassType = required(&record.class_type, "classType")?.parse()?;

    Ok(Pass {
        id: pass_id(class, from, to),
        name: name.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        class,
    })
}

/// Render a pass, or [`INVALID_PASS`] when the record is missing or invalid
pub fn format_pass(record: Option<&PassRecord>) -> String {
    let Some(record) = record else {
        return INVALID_PASS.to_string();
    };
    match build_pass(record) {
        Ok(pass) => pass.to_string(),
        Err(e) => {
            tracing::debug!(error = %e, "rejecting pass record");
            INVALID_PASS.to_string()
        }
    }
}
