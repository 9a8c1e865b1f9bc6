//! ANSI color helpers for terminal output

use colored::Colorize;
use quickparse_core::{Sentiment, StatusLabel};

/// Get colored sentiment indicator
pub fn colored_sentiment(sentiment: Sentiment) -> String {
    match sentiment {
        Sentiment::Funny => "funny".yellow().to_string(),
        Sentiment::Love => "love".magenta().to_string(),
        Sentiment::Neutral => "neutral".white().dimmed().to_string(),
    }
}

/// Get colored passenger status
pub fn colored_status(label: StatusLabel) -> String {
    match label {
        StatusLabel::Confirmed => "CONFIRMED".green().bold().to_string(),
        StatusLabel::Waiting => "WAITING".yellow().to_string(),
        StatusLabel::Cancelled => "CANCELLED".red().to_string(),
        StatusLabel::Rac => "RAC".cyan().to_string(),
        StatusLabel::Unclassified => "?".white().dimmed().to_string(),
    }
}

/// Get colored date and time of a chat message
pub fn colored_time(date: &str, time: &str) -> String {
    format!("{} {}", date, time).white().dimmed().to_string()
}

/// Get colored sender name
pub fn colored_sender(name: &str) -> String {
    name.cyan().bold().to_string()
}

/// Get colored header
pub fn header(text: &str) -> String {
    text.bold().underline().to_string()
}

/// Get colored label
pub fn label(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Get colored value
pub fn value(text: &str) -> String {
    text.white().to_string()
}

/// Get colored success message
pub fn success(text: &str) -> String {
    format!("{} {}", "✓".green(), text)
}

/// Get colored warning message
pub fn warning(text: &str) -> String {
    format!("{} {}", "⚠".yellow(), text)
}

/// Get colored error message
pub fn error(text: &str) -> String {
    format!("{} {}", "✗".red(), text)
}

/// Format count with comma separators
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
