//! End-to-end checks of the documented input/output examples
//!
//! Inputs are fed through JSON the way the CLI receives them.

use quickparse_core::{
    format_pass, parse_message_line, process_pnr, validate_form, FormInput, PassRecord, PnrRecord,
    Sentiment, INVALID_PASS,
};

#[test]
fn test_chat_line_example() {
    let msg = parse_message_line("25/01/2025, 14:30 - Rahul: Bhai party kab hai? 😂").unwrap();
    assert_eq!(msg.date, "25/01/2025");
    assert_eq!(msg.time, "14:30");
    assert_eq!(msg.sender, "Rahul");
    assert_eq!(msg.word_count, 5);
    assert_eq!(msg.sentiment, Sentiment::Funny);
}

#[test]
fn test_chat_word_count_matches_token_count() {
    let bodies = [
        "one",
        "one two",
        "  one   two  three ",
        "\tone\ttwo",
        "ek do teen char paanch chhe",
    ];
    for body in bodies {
        let line = format!("01/01/2025, 10:00 - Amit: {}", body);
        let msg = parse_message_line(&line).unwrap();
        assert_eq!(msg.word_count, body.split_whitespace().count(), "body {:?}", body);
    }
}

#[test]
fn test_chat_funny_wins_over_love() {
    let msg = parse_message_line("01/01/2025, 10:00 - Amit: haha I love this").unwrap();
    assert_eq!(msg.sentiment, Sentiment::Funny);
}

#[test]
fn test_form_example_reports_every_field() {
    let input: FormInput = serde_json::from_str(
        r#"{"name":"","email":"bad-email","phone":"12345","age":10,"pincode":"0123","state":null,"agreeTerms":false}"#,
    )
    .unwrap();
    let result = validate_form(&input);
    assert!(!result.is_valid);

    let json = serde_json::to_value(&result).unwrap();
    let mut keys: Vec<&str> = json["errors"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["age", "agreeTerms", "email", "name", "phone", "pincode", "state"]
    );
}

#[test]
fn test_form_valid_record() {
    let input: FormInput = serde_json::from_str(
        r#"{"name":"Priya Nair","email":"priya@mail.in","phone":"7012345678","age":"28","pincode":"682001","state":"Kerala","agreeTerms":"yes"}"#,
    )
    .unwrap();
    let result = validate_form(&input);
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
}

#[test]
fn test_pass_example() {
    let record: PassRecord = serde_json::from_str(
        r#"{"name":"rahul sharma","from":"dadar","to":"andheri","classType":"first"}"#,
    )
    .unwrap();
    let rendered = format_pass(Some(&record));
    let lines: Vec<&str> = rendered.split('\n').collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[2], "Name: RAHUL SHARMA");
    assert_eq!(lines[6], "Pass ID: FDADAND");

    let missing: Option<PassRecord> = serde_json::from_str("null").unwrap();
    assert_eq!(format_pass(missing.as_ref()), INVALID_PASS);
}

const PNR_JSON: &str = r#"{
    "pnr": "2345678901",
    "train": {"number": "12137", "name": "Punjab Mail", "from": "CSMT", "to": "FZR"},
    "classBooked": "SL",
    "passengers": [
        {"name": "Rahul", "age": 34, "gender": "M", "booking": "WL/20", "current": "S5/33"}
    ]
}"#;

#[test]
fn test_pnr_status_transitions() {
    let mut record: PnrRecord = serde_json::from_str(PNR_JSON).unwrap();
    let report = process_pnr(Some(&record)).unwrap();
    assert_eq!(report.pnr_formatted, "234-567-8901");
    assert!(report.summary.all_confirmed);
    assert!(report.chart_prepared);

    let mut waiting = record.passengers[0].clone();
    waiting.current = "WL/4".to_string();
    record.passengers.push(waiting);
    let report = process_pnr(Some(&record)).unwrap();
    assert!(report.summary.any_waiting);
    assert!(!report.summary.all_confirmed);
    assert!(!report.chart_prepared);

    record.passengers[1].current = "CAN".to_string();
    let report = process_pnr(Some(&record)).unwrap();
    assert!(report.summary.all_confirmed);
    assert_eq!(report.summary.cancelled, 1);
}

#[test]
fn test_pnr_rejections() {
    let base: PnrRecord = serde_json::from_str(PNR_JSON).unwrap();

    let mut bad_pnr = base.clone();
    bad_pnr.pnr = Some("23456-78901".to_string());
    assert!(process_pnr(Some(&bad_pnr)).is_none());

    let mut no_train = base.clone();
    no_train.train = None;
    assert!(process_pnr(Some(&no_train)).is_none());

    let mut no_passengers = base;
    no_passengers.passengers.clear();
    assert!(process_pnr(Some(&no_passengers)).is_none());
}
