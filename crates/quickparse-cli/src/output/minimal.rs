//! Minimal text output formatting

use quickparse_core::{ChatStats, ParsedMessage, PnrReport};

/// Format a chat message as minimal text (sender and body)
pub fn format_message(msg: &ParsedMessage) -> String {
    format!("{}: {}", msg.sender, msg.text)
}

/// Format chat statistics as a single line
pub fn format_stats(stats: &ChatStats) -> String {
    format!(
        "{} messages, {} words, {} funny, {} love, {} neutral",
        stats.total_messages, stats.total_words, stats.funny, stats.love, stats.neutral
    )
}

/// One line per passenger: formatted name and status label
pub fn format_pnr_report(report: &PnrReport) -> String {
    report
        .passengers
        .iter()
        .map(|p| format!("{}{}", p.formatted_name, p.status_label))
        .collect::<Vec<_>>()
        .join("\n")
}
