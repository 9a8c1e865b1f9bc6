//! Human-readable output formatting

use super::colors::*;
use quickparse_core::{ChatStats, ParsedMessage, PnrReport, ValidationResult};

/// Format a chat message for human-readable output
pub fn format_message(msg: &ParsedMessage, show_content: bool) -> String {
    let header = format!(
        "{} {} [{}] {} words",
        colored_time(&msg.date, &msg.time),
        colored_sender(&msg.sender),
        colored_sentiment(msg.sentiment),
        msg.word_count
    );

    if show_content {
        let indent = "  ";
        let body = msg
            .text
            .lines()
            .map(|l| format!("{}{}", indent, l))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{}\n{}", header, body)
    } else {
        format!("{} {}", header, msg.preview(60))
    }
}

/// Format chat statistics
pub fn format_stats(stats: &ChatStats) -> String {
    let mut lines = Vec::new();

    lines.push(header("Chat Statistics"));
    lines.push(String::new());
    lines.push(format!(
        "  {}: {}",
        label("Messages"),
        value(&format_count(stats.total_messages))
    ));
    lines.push(format!(
        "  {}: {}",
        label("Words"),
        value(&format_count(stats.total_words))
    ));

    if let (Some(first), Some(last)) = (stats.first_timestamp, stats.last_timestamp) {
        lines.push(format!(
            "  {}: {} → {}",
            label("Span"),
            value(&first.format("%Y-%m-%d %H:%M").to_string()),
            value(&last.format("%Y-%m-%d %H:%M").to_string())
        ));
    }

    lines.push(String::new());
    lines.push(header("Sentiment"));
    lines.push(String::new());
    for sentiment in quickparse_core::Sentiment::all() {
        lines.push(format!(
            "  {:<10} {}",
            colored_sentiment(*sentiment),
            format_count(stats.count_for(*sentiment))
        ));
    }

    if !stats.senders.is_empty() {
        lines.push(String::new());
        lines.push(header("Senders"));
        lines.push(String::new());
        for entry in &stats.senders {
            lines.push(format!(
                "  {} {}",
                colored_sender(&entry.sender),
                format_count(entry.messages)
            ));
        }
    }

    lines.join("\n")
}

/// Format a form validation result
pub fn format_validation(result: &ValidationResult) -> String {
    if result.is_valid {
        return success("All fields are valid");
    }

    let mut lines = vec![error(&format!(
        "{} field(s) failed validation",
        result.errors.len()
    ))];
    for (field, message) in &result.errors {
        lines.push(format!("  {}: {}", label(field.key()), value(message)));
    }
    lines.join("\n")
}

/// Format a PNR status report
pub fn format_pnr_report(report: &PnrReport) -> String {
    let mut lines = Vec::new();

    lines.push(header(&format!("PNR {}", report.pnr_formatted)));
    lines.push(value(&report.train_info));
    lines.push(String::new());

    for p in &report.passengers {
        lines.push(format!(
            "  {}  {} → {}  {}",
            p.formatted_name,
            label(&p.booking_status),
            value(&p.current_status),
            colored_status(p.status_label)
        ));
    }

    let s = &report.summary;
    lines.push(String::new());
    lines.push(format!(
        "{}: {} passengers, {} confirmed, {} waiting, {} RAC, {} cancelled",
        label("Summary"),
        s.total_passengers,
        s.confirmed,
        s.waiting,
        s.rac,
        s.cancelled
    ));

    let chart = if report.chart_prepared {
        success("Chart prepared")
    } else if s.any_waiting {
        warning("Chart not prepared (waiting list pending)")
    } else {
        warning("Chart not prepared")
    };
    lines.push(chart);

    lines.join("\n")
}
