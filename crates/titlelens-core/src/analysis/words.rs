/// Title word frequency.
///
/// Titles are lower-cased, punctuation is blanked out, and the remaining
/// words are counted across the whole catalog. Short words and stopwords
/// are dropped so the ranking surfaces content themes rather than grammar.
use super::tally::Tally;
use crate::model::{CleanRecord, FrequencyEntry};
use serde::Serialize;
use std::collections::HashSet;

pub const DEFAULT_MIN_WORD_LENGTH: usize = 4;
pub const DEFAULT_TOP_WORDS: usize = 50;

/// English function words plus catalog filler ("story", "night", "love").
pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "with", "from", "that", "this", "have", "they", "will", "were", "been", "their",
    "said", "each", "which", "what", "your", "when", "time", "them", "more", "very", "some",
    "would", "there", "first", "after", "part", "work", "life", "world", "love", "story", "night",
    "great", "last", "most", "into", "only", "over", "also", "back", "year", "years", "through",
    "where", "much", "before", "right", "think", "while", "young",
];

/// Ranked title words plus the scalars rendering scales against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    pub entries: Vec<FrequencyEntry>,
    /// Highest count in `entries`, 0 when empty.
    pub max_count: u64,
    /// Number of distinct words in `entries`.
    pub unique_words: usize,
}

impl WordFrequency {
    fn from_entries(entries: Vec<FrequencyEntry>) -> Self {
        let max_count = entries.iter().map(|e| e.count).max().unwrap_or(0);
        let unique_words = entries.len();
        Self {
            entries,
            max_count,
            unique_words,
        }
    }

    pub fn most_common(&self) -> Option<&FrequencyEntry> {
        self.entries.first()
    }
}

/// Build a stopword set from string slices.
pub fn stopword_set<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect()
}

/// Split one title into lower-case words.
///
/// Every character that is not alphanumeric or whitespace becomes a space,
/// then the text is split on whitespace runs.
pub fn title_words(title: &str) -> Vec<String> {
    let cleaned: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}

/// Rank title words across `records`.
///
/// A word is kept when it has at least `min_length` characters and is not a
/// stopword. Repeats within one title count separately.
pub fn tokenize(
    records: &[CleanRecord],
    stopwords: &HashSet<String>,
    min_length: usize,
    top_n: usize,
) -> WordFrequency {
    let mut tally = Tally::new();
    for record in records {
        for word in title_words(&record.title) {
            if word.chars().count() >= min_length && !stopwords.contains(&word) {
                tally.add(&word);
            }
        }
    }
    tracing::debug!(distinct = tally.distinct(), "tokenised titles");
    WordFrequency::from_entries(tally.into_ranked(top_n))
}

/// [`tokenize`] with the default stopwords, minimum length and limit.
pub fn word_frequency(records: &[CleanRecord]) -> WordFrequency {
    let stopwords = stopword_set(DEFAULT_STOPWORDS.iter());
    tokenize(
        records,
        &stopwords,
        DEFAULT_MIN_WORD_LENGTH,
        DEFAULT_TOP_WORDS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRecord;
    use crate::normalize::normalize;

    fn titled(titles: &[&str]) -> Vec<CleanRecord> {
        let raw: Vec<RawRecord> = titles
            .iter()
            .enumerate()
            .map(|(i, t)| RawRecord::new(&format!("s{i}"), "Movie", t, "2021-01-01"))
            .collect();
        normalize(&raw)
    }

    fn pairs(freq: &WordFrequency) -> Vec<(&str, u64)> {
        freq.entries
            .iter()
            .map(|e| (e.label.as_str(), e.count))
            .collect()
    }

    #[test]
    fn title_words_blank_out_punctuation() {
        assert_eq!(
            title_words("Spider-Man: Into the Spider-Verse"),
            vec!["spider", "man", "into", "the", "spider", "verse"]
        );
        assert_eq!(title_words("  "), Vec::<String>::new());
    }

    /// "great" appears in both titles, "war" and "escape" once each; ties
    /// keep first-seen order.
    #[test]
    fn counts_across_titles_with_first_seen_ties() {
        let recs = titled(&["The Great War", "Great Escape"]);
        let stop = stopword_set(["the"]);

        let freq = tokenize(&recs, &stop, 3, 50);
        assert_eq!(pairs(&freq), vec![("great", 2), ("war", 1), ("escape", 1)]);
        assert_eq!(freq.max_count, 2);
        assert_eq!(freq.unique_words, 3);
        assert_eq!(freq.most_common().map(|e| e.label.as_str()), Some("great"));
    }

    #[test]
    fn minimum_length_is_inclusive() {
        let recs = titled(&["The Great War", "Great Escape"]);
        let stop = stopword_set(["the"]);

        let freq = tokenize(&recs, &stop, 4, 50);
        assert_eq!(pairs(&freq), vec![("great", 2), ("escape", 1)]);
        assert!(freq
            .entries
            .iter()
            .all(|e| e.label.chars().count() >= 4 && !stop.contains(e.label.as_str())));
    }

    #[test]
    fn repeated_word_in_one_title_counts_twice() {
        let recs = titled(&["Run Lola Run Lola"]);
        let freq = tokenize(&recs, &HashSet::new(), 3, 50);
        assert_eq!(pairs(&freq), vec![("run", 2), ("lola", 2)]);
    }

    #[test]
    fn default_stopwords_are_filtered() {
        let recs = titled(&["Love Story", "Night Of The Living Dead", "World War Z"]);
        let freq = word_frequency(&recs);
        assert_eq!(pairs(&freq), vec![("living", 1), ("dead", 1)]);
    }

    #[test]
    fn truncates_to_top_n() {
        let recs = titled(&["alpha bravo charlie delta"]);
        let freq = tokenize(&recs, &HashSet::new(), 1, 2);
        assert_eq!(freq.entries.len(), 2);
        assert_eq!(freq.unique_words, 2);
    }

    #[test]
    fn empty_records_yield_empty_frequency() {
        let freq = word_frequency(&[]);
        assert!(freq.entries.is_empty());
        assert_eq!(freq.max_count, 0);
        assert_eq!(freq.unique_words, 0);
        assert!(freq.most_common().is_none());
    }
}
