/// Dataset-level summary: how many rows survived cleaning and how the clean
/// set splits between movies and TV shows.
///
/// Every share is computed through [`percentage`], so an empty clean set
/// reports `0.0` rather than NaN.
use crate::model::format::percentage;
use crate::model::{CleanRecord, ContentKind, FrequencyEntry};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    /// Rows handed to the normaliser.
    pub original_count: u64,
    /// Rows that came out of it.
    pub clean_count: u64,
    pub removed_count: u64,
    pub movies: u64,
    pub tv_shows: u64,
    /// Movies as a percentage of the clean set.
    pub movie_share: f64,
    /// TV shows as a percentage of the clean set.
    pub tv_show_share: f64,
    /// Movies as a percentage of movies + TV shows.
    pub movie_share_of_kinds: f64,
    /// Earliest and latest added-year, `None` for an empty set.
    pub year_range: Option<(i32, i32)>,
}

impl DatasetSummary {
    pub fn compute(original_count: usize, records: &[CleanRecord]) -> Self {
        let original_count = original_count as u64;
        let clean_count = records.len() as u64;

        let (movies, tv_shows) = kind_counts(records);

        let year_range = records
            .iter()
            .map(|r| r.year_added)
            .fold(None, |range: Option<(i32, i32)>, y| match range {
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
                None => Some((y, y)),
            });

        Self {
            original_count,
            clean_count,
            removed_count: original_count.saturating_sub(clean_count),
            movies,
            tv_shows,
            movie_share: percentage(movies, clean_count),
            tv_show_share: percentage(tv_shows, clean_count),
            movie_share_of_kinds: percentage(movies, movies + tv_shows),
            year_range,
        }
    }
}

fn kind_counts(records: &[CleanRecord]) -> (u64, u64) {
    records
        .iter()
        .fold((0, 0), |(m, t), r| match r.content_kind() {
            ContentKind::Movie => (m + 1, t),
            ContentKind::TvShow => (m, t + 1),
            ContentKind::Other => (m, t),
        })
}

/// Movies vs TV shows as a two-entry distribution.
///
/// A kind with no titles is left out, so the result may be shorter than two.
pub fn content_type_counts(records: &[CleanRecord]) -> Vec<FrequencyEntry> {
    let (movies, tv_shows) = kind_counts(records);
    [
        (ContentKind::Movie, movies),
        (ContentKind::TvShow, tv_shows),
    ]
    .into_iter()
    .filter(|&(_, n)| n > 0)
    .map(|(kind, n)| FrequencyEntry::new(kind.label(), n))
    .collect()
}

/// Share of `label`'s count in `total`, as a percentage.
///
/// `0.0` when the label is not ranked or `total` is zero.
pub fn share_of(entries: &[FrequencyEntry], label: &str, total: u64) -> f64 {
    percentage(crate::model::frequency::count_of(entries, label), total)
}
