//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use quickparse_core::Sentiment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parse chat exports, validate forms, render local train passes and check PNR status
#[derive(Parser, Debug)]
#[command(name = "quickparse")]
#[command(version)]
#[command(about = "Parse chat exports, validate forms, render passes and check PNR status")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to human on a terminal, json otherwise)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "QUICKPARSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output (one object per line for lists)
    Json,
    /// Minimal text output
    Minimal,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a chat export (one message per line)
    Chat {
        /// Export file, or - for stdin
        input: Option<PathBuf>,

        /// Parse this single line instead of reading a file
        #[arg(long, conflicts_with_all = ["input", "stats", "sentiment", "sender"])]
        line: Option<String>,

        /// Print summary statistics instead of messages
        #[arg(long)]
        stats: bool,

        /// Only show messages with this sentiment
        #[arg(long, value_parser = parse_sentiment)]
        sentiment: Option<Sentiment>,

        /// Only show messages from this sender
        #[arg(long)]
        sender: Option<String>,
    },

    /// Validate a registration form given as JSON
    Form {
        /// JSON file, or - for stdin
        input: Option<PathBuf>,
    },

    /// Render a local train pass from a JSON record
    Pass {
        /// JSON file, or - for stdin
        input: Option<PathBuf>,
    },

    /// Summarise a PNR status record given as JSON
    Pnr {
        /// JSON file, or - for stdin
        input: Option<PathBuf>,
    },
}

fn parse_sentiment(s: &str) -> Result<Sentiment, String> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_rejects_export_only_flags() {
        for extra in [
            &["--stats"][..],
            &["--sentiment", "funny"][..],
            &["--sender", "Rahul"][..],
            &["export.txt"][..],
        ] {
            let mut args = vec!["quickparse", "chat", "--line", "1/1/25, 10:00 - A: hi"];
            args.extend_from_slice(extra);
            assert!(Cli::try_parse_from(args).is_err(), "accepted {:?}", extra);
        }
    }

    #[test]
    fn test_chat_export_flags_combine() {
        let cli = Cli::try_parse_from([
            "quickparse",
            "chat",
            "export.txt",
            "--stats",
            "--sentiment",
            "love",
            "--sender",
            "Priya",
        ])
        .unwrap();
        match cli.command {
            Command::Chat {
                stats,
                sentiment,
                sender,
                line,
                ..
            } => {
                assert!(stats);
                assert_eq!(sentiment, Some(Sentiment::Love));
                assert_eq!(sender.as_deref(), Some("Priya"));
                assert!(line.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
