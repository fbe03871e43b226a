//! Reading-position history: the references a reader explicitly navigated to,
//! newest first.

use crate::position::ChapterPosition;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// A chapter with an optional verse span.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BibleReference {
    pub book: String,
    pub chapter: u32,
    #[serde(default)]
    pub verse_start: Option<u32>,
    #[serde(default)]
    pub verse_end: Option<u32>,
}

impl BibleReference {
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse_start: None,
            verse_end: None,
        }
    }

    pub fn verses(book: impl Into<String>, chapter: u32, start: u32, end: Option<u32>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse_start: Some(start),
            verse_end: end,
        }
    }

    pub fn display_string(&self) -> String {
        match (self.verse_start, self.verse_end) {
            (Some(start), Some(end)) if start != end => {
                format!("{} {}:{}-{}", self.book, self.chapter, start, end)
            }
            (Some(start), _) => format!("{} {}:{}", self.book, self.chapter, start),
            _ => format!("{} {}", self.book, self.chapter),
        }
    }

    pub fn position(&self) -> ChapterPosition {
        ChapterPosition::new(self.book.clone(), self.chapter)
    }
}

impl fmt::Display for BibleReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl From<&ChapterPosition> for BibleReference {
    fn from(position: &ChapterPosition) -> Self {
        Self::chapter(position.book_name.clone(), position.chapter_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Display form of the reference, kept for listing without re-formatting.
    pub label: String,
    pub reference: BibleReference,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingHistory {
    entries: VecDeque<HistoryEntry>,
    #[serde(skip, default = "default_max_entries")]
    max_entries: usize,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }
}

impl ReadingHistory {
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Applies a new cap, dropping the oldest entries that no longer fit.
    pub fn set_max_entries(&mut self, max_entries: usize) {
        self.max_entries = max_entries.max(1);
        self.entries.truncate(self.max_entries);
    }

    pub fn record(&mut self, reference: BibleReference, at: SystemTime) {
        let timestamp = at
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        self.entries.push_front(HistoryEntry {
            label: reference.display_string(),
            reference,
            timestamp,
        });
        self.entries.truncate(self.max_entries);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> impl ExactSizeIterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &str, max_entries: usize) -> serde_json::Result<Self> {
        let mut history: Self = serde_json::from_str(data)?;
        history.set_max_entries(max_entries);
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn references_format_like_citations() {
        assert_eq!(BibleReference::verses("John", 3, 16, None).display_string(), "John 3:16");
        assert_eq!(
            BibleReference::verses("Romans", 8, 28, Some(30)).display_string(),
            "Romans 8:28-30"
        );
        assert_eq!(BibleReference::verses("Jude", 1, 3, Some(3)).display_string(), "Jude 1:3");
        assert_eq!(BibleReference::chapter("Genesis", 1).to_string(), "Genesis 1");
    }

    #[test]
    fn newest_entries_come_first() {
        let mut history = ReadingHistory::default();
        history.record(BibleReference::chapter("Genesis", 1), at(10));
        history.record(BibleReference::chapter("John", 3), at(20));

        let labels: Vec<&str> = history.entries().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["John 3", "Genesis 1"]);
        assert_eq!(history.latest().map(|e| e.timestamp), Some(20));
    }

    #[test]
    fn history_is_capped() {
        let mut history = ReadingHistory::with_capacity(3);
        for chapter in 1..=5 {
            history.record(BibleReference::chapter("Psalms", chapter), at(chapter as u64));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().reference.chapter, 5);
        assert_eq!(history.entries().last().unwrap().reference.chapter, 3);
    }

    #[test]
    fn reloading_applies_the_configured_cap() {
        let mut history = ReadingHistory::with_capacity(10);
        for chapter in 1..=6 {
            history.record(BibleReference::chapter("Acts", chapter), at(chapter as u64));
        }
        let json = history.to_json().unwrap();
        let reloaded = ReadingHistory::from_json(&json, 4).unwrap();
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.latest(), history.latest());
    }

    #[test]
    fn clear_empties_history() {
        let mut history = ReadingHistory::default();
        history.record(BibleReference::chapter("Mark", 1), at(1));
        history.clear();
        assert!(history.is_empty());
    }
}
