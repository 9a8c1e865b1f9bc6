//! Shared value types and small text helpers

use serde::{Deserialize, Serialize};

/// A loosely typed input value as it arrives from a submitted form or JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Arrays and objects; never valid where text or numbers are expected
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Borrow the string payload, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

/// A display-only scalar that may arrive as a JSON string or number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl Default for TextOrNumber {
    fn default() -> Self {
        TextOrNumber::Text(String::new())
    }
}

impl std::fmt::Display for TextOrNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextOrNumber::Text(s) => f.write_str(s),
            TextOrNumber::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for TextOrNumber {
    fn from(s: &str) -> Self {
        TextOrNumber::Text(s.to_string())
    }
}

impl From<u32> for TextOrNumber {
    fn from(n: u32) -> Self {
        TextOrNumber::Number(n.into())
    }
}

/// Boolean coercion for optional input values.
///
/// Falsy: missing, `false`, `0`, `-0`, `NaN`, the empty string and JSON `null`.
/// Everything else, including `"false"`, `"0"`, `[]` and `{}`, is truthy.
pub fn is_truthy(value: Option<&FieldValue>) -> bool {
    match value {
        None => false,
        Some(FieldValue::Bool(b)) => *b,
        Some(FieldValue::Number(n)) => !(n.is_nan() || *n == 0.0),
        Some(FieldValue::Text(s)) => !s.is_empty(),
        Some(FieldValue::Other(v)) => !v.is_null(),
    }
}

/// First letter uppercase, remainder lowercase ("aNDHERI" -> "Andheri")
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Uppercased prefix of at most `n` characters
pub fn upper_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).collect::<String>().to_uppercase()
}

/// True when `s` is non-empty and every character is an ASCII digit
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
