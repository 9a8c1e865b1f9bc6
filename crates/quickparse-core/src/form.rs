//! Registration form validation
//!
//! Every field is checked independently and all failures are reported
//! together, so a caller can show the full list of problems at once.

use crate::types::{is_ascii_digits, is_truthy, FieldValue};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const NAME_LEN: std::ops::RangeInclusive<usize> = 2..=50;
const AGE_RANGE: std::ops::RangeInclusive<i64> = 16..=100;
const PHONE_LEN: usize = 10;
const PINCODE_LEN: usize = 6;

/// Plain decimal notation only; no exponents, `inf` or `NaN`
static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+(\.\d+)?$").expect("decimal pattern is a valid regex")
});

/// Submitted form fields; any of them may be missing or of the wrong type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormInput {
    #[serde(default)]
    pub name: Option<FieldValue>,
    #[serde(default)]
    pub email: Option<FieldValue>,
    #[serde(default)]
    pub phone: Option<FieldValue>,
    #[serde(default)]
    pub age: Option<FieldValue>,
    #[serde(default)]
    pub pincode: Option<FieldValue>,
    #[serde(default)]
    pub state: Option<FieldValue>,
    #[serde(default)]
    pub agree_terms: Option<FieldValue>,
}

/// Form fields, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Age,
    Pincode,
    State,
    AgreeTerms,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Email,
            FormField::Phone,
            FormField::Age,
            FormField::Pincode,
            FormField::State,
            FormField::AgreeTerms,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Age => "age",
            FormField::Pincode => "pincode",
            FormField::State => "state",
            FormField::AgreeTerms => "agreeTerms",
        }
    }

    /// Message reported when this field fails
    pub fn error_message(&self) -> &'static str {
        match self {
            FormField::Name => "Name must be between 2 and 50 characters",
            FormField::Email => "Enter a valid email address",
            FormField::Phone => "Phone must be a 10-digit number starting with 6, 7, 8 or 9",
            FormField::Age => "Age must be a number between 16 and 100",
            FormField::Pincode => "Pincode must be 6 digits and cannot start with 0",
            FormField::State => "State is required",
            FormField::AgreeTerms => "You must agree to the terms and conditions",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Outcome of validating a form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<FormField, String>,
}

impl ValidationResult {
    fn from_errors(errors: BTreeMap<FormField, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Validate all seven fields, collecting one message per failing field
pub fn validate_form(input: &FormInput) -> ValidationResult {
    let checks: [(FormField, bool); 7] = [
        (FormField::Name, valid_name(input.name.as_ref())),
        (FormField::Email, valid_email(input.email.as_ref())),
        (FormField::Phone, valid_phone(input.phone.as_ref())),
        (FormField::Age, valid_age(input.age.as_ref())),
        (FormField::Pincode, valid_pincode(input.pincode.as_ref())),
        (FormField::State, valid_state(input.state.as_ref())),
        (FormField::AgreeTerms, is_truthy(input.agree_terms.as_ref())),
    ];

    let errors: BTreeMap<FormField, String> = checks
        .into_iter()
        .filter(|(_, ok)| !ok)
        .map(|(field, _)| (field, field.error_message().to_string()))
        .collect();

    if !errors.is_empty() {
        tracing::debug!(failed = errors.len(), "form validation failed");
    }
    ValidationResult::from_errors(errors)
}

fn text_of(value: Option<&FieldValue>) -> Option<&str> {
    value.and_then(FieldValue::as_text)
}

fn valid_name(value: Option<&FieldValue>) -> bool {
    text_of(value).is_some_and(|s| NAME_LEN.contains(&s.trim().chars().count()))
}

fn valid_email(value: Option<&FieldValue>) -> bool {
    let Some(email) = text_of(value) else {
        return false;
    };
    if email.matches('@').count() != 1 {
        return false;
    }
    match email.find('@') {
        Some(at) => email[at + 1..].contains('.'),
        None => false,
    }
}

fn valid_phone(value: Option<&FieldValue>) -> bool {
    text_of(value).is_some_and(|s| {
        s.len() == PHONE_LEN && is_ascii_digits(s) && matches!(s.as_bytes()[0], b'6'..=b'9')
    })
}

/// Integer reading of an age value; fractional numbers are truncated
pub fn parse_age(value: &FieldValue) -> Option<i64> {
    match value {
        FieldValue::Number(n) if n.is_finite() => Some(n.trunc() as i64),
        FieldValue::Text(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                if !DECIMAL_PATTERN.is_match(s) {
                    return None;
                }
                s.parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(|n| n.trunc() as i64)
            })
        }
        _ => None,
    }
}

fn valid_age(value: Option<&FieldValue>) -> bool {
    value
        .and_then(parse_age)
        .is_some_and(|age| AGE_RANGE.contains(&age))
}

fn valid_pincode(value: Option<&FieldValue>) -> bool {
    text_of(value)
        .is_some_and(|s| s.len() == PINCODE_LEN && is_ascii_digits(s) && !s.starts_with('0'))
}

fn valid_state(value: Option<&FieldValue>) -> bool {
    match value {
        None => false,
        Some(v) => v.as_text().is_some_and(|s| !s.trim().is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput {
            name: Some("Rahul Sharma".into()),
            email: Some("rahul@example.com".into()),
            phone: Some("9876543210".into()),
            age: Some(FieldValue::from(25i64)),
            pincode: Some("400001".into()),
            state: Some("Maharashtra".into()),
            agree_terms: Some(true.into()),
        }
    }

    #[test]
    fn test_valid_form() {
        let result = validate_form(&valid_input());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_all_fields_invalid() {
        let input: FormInput = serde_json::from_str(
            r#"{"name":"","email":"bad-email","phone":"12345","age":10,"pincode":"0123","state":null,"agreeTerms":false}"#,
        )
        .unwrap();
        let result = validate_form(&input);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 7);
        let keys: Vec<_> = result.errors.keys().copied().collect();
        assert_eq!(keys, FormField::all());
    }

    #[test]
    fn test_empty_form() {
        let result = validate_form(&FormInput::default());
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 7);
    }

    #[test]
    fn test_name_bounds() {
        assert!(valid_name(Some(&"Al".into())));
        assert!(valid_name(Some(&"  Al  ".into())));
        assert!(!valid_name(Some(&" A ".into())));
        assert!(valid_name(Some(&"a".repeat(50).into())));
        assert!(!valid_name(Some(&"a".repeat(51).into())));
        assert!(!valid_name(Some(&FieldValue::Number(42.0))));
    }

    #[test]
    fn test_email_rules() {
        assert!(valid_email(Some(&"a@b.in".into())));
        assert!(valid_email(Some(&"first.last@mail.co.in".into())));
        assert!(!valid_email(Some(&"a.b@com".into())));
        assert!(!valid_email(Some(&"a@@b.com".into())));
        assert!(!valid_email(Some(&"a@b@c.com".into())));
        assert!(!valid_email(Some(&"no-at.com".into())));
        assert!(!valid_email(None));
    }

    #[test]
    fn test_phone_rules() {
        assert!(valid_phone(Some(&"6123456789".into())));
        assert!(!valid_phone(Some(&"5123456789".into())));
        assert!(!valid_phone(Some(&"912345678".into())));
        assert!(!valid_phone(Some(&"98765x3210".into())));
        assert!(!valid_phone(Some(&FieldValue::Number(9876543210.0))));
    }

    #[test]
    fn test_age_parsing() {
        assert_eq!(parse_age(&"25".into()), Some(25));
        assert_eq!(parse_age(&" 30 ".into()), Some(30));
        assert_eq!(parse_age(&"16.9".into()), Some(16));
        assert_eq!(parse_age(&FieldValue::Number(99.5)), Some(99));
        assert_eq!(parse_age(&"twenty".into()), None);
        assert_eq!(parse_age(&"25abc".into()), None);
        assert_eq!(parse_age(&"1e2".into()), None);
        assert_eq!(parse_age(&"inf".into()), None);
        assert_eq!(parse_age(&".5".into()), None);
        assert_eq!(parse_age(&"-17.0".into()), Some(-17));
        assert_eq!(parse_age(&FieldValue::Bool(true)), None);

        assert!(valid_age(Some(&"16".into())));
        assert!(valid_age(Some(&FieldValue::Number(100.0))));
        assert!(!valid_age(Some(&"15".into())));
        assert!(!valid_age(Some(&"101".into())));
        assert!(!valid_age(None));
    }

    #[test]
    fn test_exponent_age_fails_validation() {
        let mut input = valid_input();
        input.age = Some("1e2".into());
        let result = validate_form(&input);
        assert!(!result.is_valid);
        assert!(result.error_for(FormField::Age).is_some());
    }

    #[test]
    fn test_pincode_rules() {
        assert!(valid_pincode(Some(&"110001".into())));
        assert!(!valid_pincode(Some(&"011001".into())));
        assert!(!valid_pincode(Some(&"11001".into())));
        assert!(!valid_pincode(Some(&FieldValue::Number(110001.0))));
    }

    #[test]
    fn test_state_and_terms() {
        let mut input = valid_input();
        input.state = Some("   ".into());
        input.agree_terms = Some(FieldValue::Number(0.0));
        let result = validate_form(&input);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.error_for(FormField::State), Some("State is required"));
        assert!(result.error_for(FormField::AgreeTerms).is_some());
    }

    #[test]
    fn test_single_violation_is_invalid() {
        let mutations: [fn(&mut FormInput); 7] = [
            |f| f.name = None,
            |f| f.email = Some("rahul.example.com".into()),
            |f| f.phone = Some("0000000000".into()),
            |f| f.age = Some("abc".into()),
            |f| f.pincode = Some("40001".into()),
            |f| f.state = Some("".into()),
            |f| f.agree_terms = Some("".into()),
        ];
        for (mutate, field) in mutations.iter().zip(FormField::all()) {
            let mut input = valid_input();
            mutate(&mut input);
            let result = validate_form(&input);
            assert!(!result.is_valid, "expected {} to fail", field);
            assert_eq!(result.errors.len(), 1);
            assert!(result.errors.contains_key(field));
        }
    }

    #[test]
    fn test_result_serializes_with_field_keys() {
        let mut input = valid_input();
        input.agree_terms = None;
        let json = serde_json::to_value(validate_form(&input)).unwrap();
        assert_eq!(json["isValid"], false);
        assert!(json["errors"]["agreeTerms"].is_string());
    }
}
