//! Filtering and summary statistics over parsed chat messages

use crate::message::{ParsedMessage, Sentiment};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message count for one sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderCount {
    pub sender: String,
    pub messages: usize,
}

/// Aggregate statistics for a chat export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStats {
    pub total_messages: usize,
    pub total_words: usize,
    pub funny: usize,
    pub love: usize,
    pub neutral: usize,
    /// Most active first; ties broken by name
    pub senders: Vec<SenderCount>,
    pub first_timestamp: Option<NaiveDateTime>,
    pub last_timestamp: Option<NaiveDateTime>,
}

impl ChatStats {
    pub fn count_for(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Funny => self.funny,
            Sentiment::Love => self.love,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Summarise a list of messages
pub fn chat_stats(messages: &[ParsedMessage]) -> ChatStats {
    let mut stats = ChatStats {
        total_messages: messages.len(),
        ..Default::default()
    };
    let mut per_sender: HashMap<&str, usize> = HashMap::new();

    for msg in messages {
        stats.total_words += msg.word_count;
        match msg.sentiment {
            Sentiment::Funny => stats.funny += 1,
            Sentiment::Love => stats.love += 1,
            Sentiment::Neutral => stats.neutral += 1,
        }
        *per_sender.entry(msg.sender.as_str()).or_insert(0) += 1;

        if let Some(ts) = msg.timestamp() {
            stats.first_timestamp = Some(stats.first_timestamp.map_or(ts, |t| t.min(ts)));
            stats.last_timestamp = Some(stats.last_timestamp.map_or(ts, |t| t.max(ts)));
        }
    }

    let mut senders: Vec<SenderCount> = per_sender
        .into_iter()
        .map(|(sender, messages)| SenderCount {
            sender: sender.to_string(),
            messages,
        })
        .collect();
    senders.sort_by(|a, b| b.messages.cmp(&a.messages).then_with(|| a.sender.cmp(&b.sender)));
    stats.senders = senders;

    stats
}

/// Keep only messages with the given sentiment
pub fn filter_by_sentiment(
    messages: &[ParsedMessage],
    sentiment: Sentiment,
) -> Vec<&ParsedMessage> {
    messages.iter().filter(|m| m.sentiment == sentiment).collect()
}

/// Keep only messages from the given sender (case-insensitive, surrounding whitespace ignored)
pub fn filter_by_sender<'a>(messages: &'a [ParsedMessage], sender: &str) -> Vec<&'a ParsedMessage> {
    let wanted = sender.trim().to_lowercase();
    messages
        .iter()
        .filter(|m| m.sender.trim().to_lowercase() == wanted)
        .collect()
}
