/// Time bucketing — record counts per added-month and per added-year,
/// split into movies and TV shows.
///
/// The month axis is the closed set Jan–Dec and is always complete
/// (zero-filled). The year axis only contains years that occur in the data,
/// ascending, with no gap filling.
use crate::model::{CleanRecord, ContentKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Short month names, index 0 = January.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// The calendar unit a bucket covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BucketUnit {
    /// 1–12.
    Month(u32),
    Year(i32),
}

impl BucketUnit {
    /// `"Jan"`… for months, the decimal year for years.
    pub fn label(self) -> String {
        match self {
            Self::Month(m) => month_name(m).to_owned(),
            Self::Year(y) => y.to_string(),
        }
    }
}

/// One calendar unit with its per-kind counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeBucket {
    pub unit: BucketUnit,
    pub movies: u64,
    pub tv_shows: u64,
}

impl TimeBucket {
    pub fn new(unit: BucketUnit) -> Self {
        Self {
            unit,
            movies: 0,
            tv_shows: 0,
        }
    }

    #[inline]
    pub fn total(&self) -> u64 {
        self.movies + self.tv_shows
    }

    /// `true` for a bucket with no titles, including the empty-peak sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn count(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Movie => self.movies += 1,
            ContentKind::TvShow => self.tv_shows += 1,
            ContentKind::Other => {}
        }
    }
}

/// Short name for a 1-based month, `"?"` outside 1–12.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("?")
}

/// Exactly twelve buckets, January first.
pub fn bucket_by_month(records: &[CleanRecord]) -> Vec<TimeBucket> {
    let mut buckets: Vec<TimeBucket> = (1..=12)
        .map(|m| TimeBucket::new(BucketUnit::Month(m)))
        .collect();

    for record in records {
        if let Some(bucket) = record
            .month_added
            .checked_sub(1)
            .and_then(|i| buckets.get_mut(i as usize))
        {
            bucket.count(record.content_kind());
        }
    }
    buckets
}

/// One bucket per distinct added-year, ascending.
///
/// Every year present in the data gets a bucket, even if none of its
/// records is a movie or TV show.
pub fn bucket_by_year(records: &[CleanRecord]) -> Vec<TimeBucket> {
    let mut years: BTreeMap<i32, TimeBucket> = BTreeMap::new();
    for record in records {
        years
            .entry(record.year_added)
            .or_insert_with(|| TimeBucket::new(BucketUnit::Year(record.year_added)))
            .count(record.content_kind());
    }
    years.into_values().collect()
}

/// The bucket with the largest total; the first one wins a tie.
///
/// Returns `None` only for an empty slice.
pub fn peak(buckets: &[TimeBucket]) -> Option<&TimeBucket> {
    buckets.iter().fold(None, |best: Option<&TimeBucket>, b| match best {
        Some(cur) if cur.total() >= b.total() => Some(cur),
        _ => Some(b),
    })
}

/// Peak month; January with zero counts when there is nothing to rank.
pub fn peak_month(buckets: &[TimeBucket]) -> TimeBucket {
    peak(buckets)
        .copied()
        .unwrap_or_else(|| TimeBucket::new(BucketUnit::Month(1)))
}

/// Peak year; `Year(0)` with zero counts for an empty year axis.
pub fn peak_year(buckets: &[TimeBucket]) -> TimeBucket {
    peak(buckets)
        .copied()
        .unwrap_or_else(|| TimeBucket::new(BucketUnit::Year(0)))
}
