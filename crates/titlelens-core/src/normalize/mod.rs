/// Record normaliser — raw rows in, clean records out.
///
/// Pure and deterministic. Data-quality problems are absorbed, never
/// reported: duplicate identifiers, missing dates and unparseable dates all
/// drop the row silently, and a non-numeric release year becomes `0`.
/// An empty output is a valid result.
pub mod date;

use crate::model::{CleanRecord, RawRecord};
use date::calendar_parts;
use std::collections::HashSet;
use tracing::debug;

/// Per-reason drop counts from a normalisation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    pub input_rows: usize,
    pub duplicate_ids: usize,
    pub missing_dates: usize,
    pub unparseable_dates: usize,
    pub output_rows: usize,
}

/// Normalise a sequence of raw rows.
///
/// 1. Deduplicate by `show_id`, first occurrence wins.
/// 2. Drop rows whose `date_added` is empty after trimming.
/// 3. Parse `date_added`; drop rows where parsing fails.
/// 4. Coerce `release_year`, defaulting to 0.
///
/// Output preserves input order.
pub fn normalize(raw_rows: &[RawRecord]) -> Vec<CleanRecord> {
    normalize_with_stats(raw_rows).0
}

/// [`normalize`] plus the drop counts, for callers that want to report them.
pub fn normalize_with_stats(raw_rows: &[RawRecord]) -> (Vec<CleanRecord>, NormalizeStats) {
    let mut stats = NormalizeStats {
        input_rows: raw_rows.len(),
        ..NormalizeStats::default()
    };

    let mut seen: HashSet<&str> = HashSet::with_capacity(raw_rows.len());
    let unique: Vec<&RawRecord> = raw_rows
        .iter()
        .filter(|row| seen.insert(row.show_id.as_str()))
        .collect();
    stats.duplicate_ids = raw_rows.len() - unique.len();

    let dated: Vec<&RawRecord> = unique
        .into_iter()
        .filter(|row| !row.date_added.trim().is_empty())
        .collect();
    stats.missing_dates = raw_rows.len() - stats.duplicate_ids - dated.len();

    let mut clean = Vec::with_capacity(dated.len());
    for row in dated {
        match calendar_parts(&row.date_added) {
            Some(parts) => clean.push(CleanRecord {
                show_id: row.show_id.clone(),
                kind: row.kind.clone(),
                title: row.title.clone(),
                director: row.director.clone(),
                cast: row.cast.clone(),
                country: row.country.clone(),
                date_added: row.date_added.clone(),
                release_year: coerce_release_year(&row.release_year),
                rating: row.rating.clone(),
                duration: row.duration.clone(),
                listed_in: row.listed_in.clone(),
                year_added: parts.year,
                month_added: parts.month,
                day_added: parts.day,
            }),
            None => stats.unparseable_dates += 1,
        }
    }
    stats.output_rows = clean.len();

    debug!(
        input = stats.input_rows,
        duplicates = stats.duplicate_ids,
        missing_dates = stats.missing_dates,
        unparseable_dates = stats.unparseable_dates,
        output = stats.output_rows,
        "normalised catalog rows"
    );

    (clean, stats)
}

/// Coerce release-year text to an integer.
///
/// Accepts surrounding whitespace and decimal forms (`"2019.0"` as written
/// by some spreadsheet exports, truncated). Anything else is `0`.
pub fn coerce_release_year(text: &str) -> i32 {
    let s = text.trim();
    if let Ok(year) = s.parse::<i32>() {
        return year;
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= i32::MAX as f64 => v.trunc() as i32,
        _ => 0,
    }
}
