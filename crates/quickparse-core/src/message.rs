//! Chat export line parsing
//!
//! Handles lines in the `DATE, TIME - SENDER: BODY` shape produced by chat
//! exports, e.g. `25/01/2025, 14:30 - Rahul: Bhai party kab hai? 😂`.

use crate::errors::{CoreError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

const SENDER_SEPARATOR: &str = " - ";
const BODY_DIVIDER: &str = ": ";

/// `datetime` ends at the first " - "; `sender` ends at the first ": " after it.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<datetime>.*?) - (?P<sender>.*?): (?P<body>.*)$")
        .expect("line pattern is a valid regex")
});

const FUNNY_MARKERS: &[&str] = &["😂", ":)"];
const FUNNY_WORDS: &[&str] = &["haha"];
const LOVE_MARKERS: &[&str] = &["\u{2764}"];
const LOVE_WORDS: &[&str] = &["love", "pyaar"];

/// Overall tone of a message body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Funny,
    Love,
    Neutral,
}

impl Sentiment {
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Funny, Sentiment::Love, Sentiment::Neutral]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Funny => "funny",
            Sentiment::Love => "love",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "funny" => Ok(Sentiment::Funny),
            "love" => Ok(Sentiment::Love),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("unknown sentiment: {}", other)),
        }
    }
}

/// One parsed chat line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedMessage {
    pub date: String,
    pub time: String,
    pub sender: String,
    pub text: String,
    pub word_count: usize,
    pub sentiment: Sentiment,
}

impl ParsedMessage {
    /// Interpret `date`/`time` as a local timestamp.
    ///
    /// Accepts `DD/MM/YYYY` or `DD/MM/YY` dates and `HH:MM` (24h) or
    /// `h:MM am/pm` times. Returns `None` for anything else.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = parse_date(&self.date)?;
        let time = parse_time(&self.time)?;
        Some(date.and_time(time))
    }

    /// Get preview text for list display
    pub fn preview(&self, max_len: usize) -> String {
        let chars: Vec<char> = self.text.chars().collect();
        if chars.len() > max_len {
            let truncated: String = chars[..max_len.saturating_sub(3)].iter().collect();
            format!("{}...", truncated)
        } else {
            self.text.clone()
        }
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    let year_len = date.rsplit('/').next().map(str::len).unwrap_or(0);
    let format = if year_len == 2 { "%d/%m/%y" } else { "%d/%m/%Y" };
    NaiveDate::parse_from_str(date, format).ok()
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    // Exports from some phones put a narrow no-break space before am/pm
    let time = time.replace('\u{202f}', " ");
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%I:%M %p"))
        .ok()
}

/// Parse a single chat line, reporting which separator was missing
pub fn try_parse_message_line(line: &str) -> Result<ParsedMessage> {
    let captures = LINE_PATTERN.captures(line).ok_or_else(|| {
        let expected = if line.contains(SENDER_SEPARATOR) {
            BODY_DIVIDER
        } else {
            SENDER_SEPARATOR
        };
        CoreError::MissingSeparator {
            expected,
            line: line.to_string(),
        }
    })?;

    let datetime = &captures["datetime"];
    let mut parts = datetime.split(", ");
    let date = parts.next().unwrap_or_default().to_string();
    let time = parts.next().unwrap_or_default().to_string();

    let text = captures["body"].trim().to_string();
    let word_count = count_words(&text);
    let sentiment = classify_sentiment(&text);

    Ok(ParsedMessage {
        date,
        time,
        sender: captures["sender"].to_string(),
        text,
        word_count,
        sentiment,
    })
}

/// Parse a single chat line; `None` when it is not in `DATE, TIME - SENDER: BODY` form
pub fn parse_message_line(line: &str) -> Option<ParsedMessage> {
    try_parse_message_line(line).ok()
}

/// Number of non-empty whitespace-separated tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Funny markers are checked first, so they win over love markers
pub fn classify_sentiment(text: &str) -> Sentiment {
    let lower = text.to_lowercase();

    let funny = FUNNY_MARKERS.iter().any(|m| text.contains(m))
        || FUNNY_WORDS.iter().any(|w| lower.contains(w));
    if funny {
        return Sentiment::Funny;
    }

    let love = LOVE_MARKERS.iter().any(|m| text.contains(m))
        || LOVE_WORDS.iter().any(|w| lower.contains(w));
    if love {
        return Sentiment::Love;
    }

    Sentiment::Neutral
}

/// Parse a whole chat export, skipping lines that are not messages
/// (continuation lines of multi-line messages, system notices, blanks)
pub fn parse_chat(input: &str) -> Vec<ParsedMessage> {
    input
        .lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .filter_map(|(idx, raw)| match try_parse_message_line(raw) {
            Ok(msg) => Some(msg),
            Err(e) => {
                tracing::debug!(line = idx + 1, error = %e, "skipping chat line");
                None
            }
        })
        .collect()
}

/// Parse a chat export file
pub fn parse_chat_file<P: AsRef<Path>>(path: P) -> Result<Vec<ParsedMessage>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    let reader = BufReader::new(file);
    let mut messages = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let raw = line_result?;
        // Exports often start with a byte order mark
        let raw = raw.trim_start_matches('\u{FEFF}');
        if raw.trim().is_empty() {
            continue;
        }
        match try_parse_message_line(raw) {
            Ok(msg) => messages.push(msg),
            Err(e) => tracing::debug!(line = idx + 1, error = %e, "skipping chat line"),
        }
    }

    tracing::debug!(path = %path.display(), count = messages.len(), "parsed chat file");
    Ok(messages)
}
