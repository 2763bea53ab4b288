/// Insertion-ordered frequency counter shared by the aggregators.
///
/// Counts live in a `Vec` in first-seen order; the map only stores each
/// label's position. Ranking is a stable sort on count, so equal counts keep
/// their first-seen order without depending on map iteration order.
use crate::model::FrequencyEntry;
use compact_str::CompactString;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct Tally {
    entries: Vec<FrequencyEntry>,
    index: HashMap<CompactString, usize>,
}

impl Tally {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Increment `label`, registering it on first sight.
    pub(crate) fn add(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(CompactString::new(label), self.entries.len());
                self.entries.push(FrequencyEntry::new(label, 1));
            }
        }
    }

    /// Number of distinct labels seen so far.
    pub(crate) fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Descending by count, ties by first-seen order, truncated to `top_n`.
    pub(crate) fn into_ranked(self, top_n: usize) -> Vec<FrequencyEntry> {
        let mut entries = self.entries;
        entries.retain(|e| e.count > 0);
        // `sort_by` is stable, which is what makes the tie-break deterministic.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(top_n);
        entries
    }
}
