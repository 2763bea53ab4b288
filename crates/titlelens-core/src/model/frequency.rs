/// A single `(label, count)` pair in a ranked distribution.
///
/// Labels are short (country names, genres, ratings, title words), so they
/// are stored as `CompactString` and usually live inline without a heap
/// allocation.
use compact_str::CompactString;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    /// Trimmed label text.
    pub label: CompactString,
    /// Always positive in aggregator output.
    pub count: u64,
}

impl FrequencyEntry {
    pub fn new(label: impl Into<CompactString>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Sum of all counts in a distribution.
pub fn total_count(entries: &[FrequencyEntry]) -> u64 {
    entries.iter().map(|e| e.count).sum()
}

/// Look up the count recorded for `label`, or 0 if it was not ranked.
pub fn count_of(entries: &[FrequencyEntry], label: &str) -> u64 {
    entries
        .iter()
        .find(|e| e.label == label)
        .map_or(0, |e| e.count)
}
