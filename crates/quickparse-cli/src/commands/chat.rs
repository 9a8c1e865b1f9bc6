//! Chat command - parse a chat export or a single line

use anyhow::{Context, Result};
use quickparse_core::{
    chat_stats, filter_by_sender, filter_by_sentiment, parse_chat, parse_chat_file,
    try_parse_message_line, ParsedMessage, Sentiment,
};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::input;
use crate::output::{colors, human, json, minimal};

pub struct ChatArgs<'a> {
    pub input: Option<&'a Path>,
    pub line: Option<&'a str>,
    pub stats: bool,
    pub sentiment: Option<Sentiment>,
    pub sender: Option<&'a str>,
}

pub fn run(config: &Config, args: ChatArgs<'_>) -> Result<()> {
    if let Some(line) = args.line {
        let msg = try_parse_message_line(line).context("Not a chat message line")?;
        return print_messages(config, &[msg], true);
    }

    let messages = load_messages(args.input)?;
    let parsed = messages.len();
    let messages = select(messages, args.sentiment, args.sender);
    tracing::info!(parsed, selected = messages.len(), "chat export loaded");

    if args.stats {
        let stats = chat_stats(&messages);
        match config.effective_format() {
            OutputFormat::Human => println!("{}", human::format_stats(&stats)),
            OutputFormat::Json => println!("{}", json::format_value(&stats, config.pretty)?),
            OutputFormat::Minimal => println!("{}", minimal::format_stats(&stats)),
        }
        return Ok(());
    }

    if messages.is_empty() && config.effective_format() == OutputFormat::Human {
        eprintln!("{}", colors::warning("No chat messages found"));
        return Ok(());
    }

    print_messages(config, &messages, false)
}

fn load_messages(path: Option<&Path>) -> Result<Vec<ParsedMessage>> {
    match path {
        Some(p) if !input::is_stdin(Some(p)) => {
            parse_chat_file(p).context(format!("Failed to load chat export {}", p.display()))
        }
        _ => Ok(parse_chat(&input::read_text(None)?)),
    }
}

fn select(
    messages: Vec<ParsedMessage>,
    sentiment: Option<Sentiment>,
    sender: Option<&str>,
) -> Vec<ParsedMessage> {
    let messages = match sentiment {
        Some(s) => filter_by_sentiment(&messages, s).into_iter().cloned().collect(),
        None => messages,
    };
    match sender {
        Some(name) => filter_by_sender(&messages, name).into_iter().cloned().collect(),
        None => messages,
    }
}

fn print_messages(config: &Config, messages: &[ParsedMessage], show_content: bool) -> Result<()> {
    for msg in messages {
        match config.effective_format() {
            OutputFormat::Human => println!("{}", human::format_message(msg, show_content)),
            OutputFormat::Json => println!("{}", json::format_value(msg, config.pretty)?),
            OutputFormat::Minimal => println!("{}", minimal::format_message(msg)),
        }
    }
    Ok(())
}
