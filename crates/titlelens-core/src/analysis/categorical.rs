/// Categorical aggregation over multi-value, delimiter-separated columns.
///
/// One algorithm serves every categorical view (countries, directors, cast,
/// genres, ratings); the views differ only in the column read, the
/// placeholder set and whether a blank value is counted under a default
/// label.
use super::placeholders::Placeholders;
use super::tally::Tally;
use crate::model::{CleanRecord, FrequencyEntry};
use serde::Serialize;

/// The categorical columns of a clean record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoricalField {
    Country,
    Director,
    Cast,
    Genre,
    Rating,
}

impl CategoricalField {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Director => "Director",
            Self::Cast => "Cast",
            Self::Genre => "Genre",
            Self::Rating => "Rating",
        }
    }

    /// Borrow this column's raw text from `record`.
    pub fn value(self, record: &CleanRecord) -> &str {
        match self {
            Self::Country => &record.country,
            Self::Director => &record.director,
            Self::Cast => &record.cast,
            Self::Genre => &record.listed_in,
            Self::Rating => &record.rating,
        }
    }
}

/// Parameters for [`aggregate`].
#[derive(Debug, Clone, Copy)]
pub struct AggregateOptions<'a> {
    pub delimiter: char,
    pub top_n: usize,
    pub placeholders: &'a Placeholders,
    /// When set, a blank field is counted under this label instead of
    /// skipping the record.
    pub missing_label: Option<&'a str>,
}

impl<'a> AggregateOptions<'a> {
    /// Comma-delimited, no default label.
    pub fn new(top_n: usize, placeholders: &'a Placeholders) -> Self {
        Self {
            delimiter: ',',
            top_n,
            placeholders,
            missing_label: None,
        }
    }

    pub fn with_missing_label(mut self, label: &'a str) -> Self {
        self.missing_label = Some(label);
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Count token frequencies of the column returned by `select`.
///
/// A record whose field is blank or a placeholder contributes nothing
/// (unless `missing_label` is set and the field is blank). Otherwise the
/// field is split on the delimiter, each token trimmed, and every
/// non-blank, non-placeholder token counted, so a record listing three
/// countries bumps three counters. The result is sorted by descending count
/// with ties in first-seen order and holds at most `top_n` entries.
pub fn aggregate<F>(
    records: &[CleanRecord],
    select: F,
    options: &AggregateOptions<'_>,
) -> Vec<FrequencyEntry>
where
    F: Fn(&CleanRecord) -> &str,
{
    if options.top_n == 0 {
        return Vec::new();
    }

    let mut tally = Tally::new();
    for record in records {
        let field = select(record);

        if field.trim().is_empty() {
            if let Some(label) = options.missing_label {
                tally.add(label);
            }
            continue;
        }
        if options.placeholders.is_placeholder(field) {
            continue;
        }

        for token in field.split(options.delimiter).map(str::trim) {
            if !options.placeholders.is_placeholder(token) {
                tally.add(token);
            }
        }
    }

    tally.into_ranked(options.top_n)
}

/// [`aggregate`] over one of the known columns.
pub fn field_distribution(
    records: &[CleanRecord],
    field: CategoricalField,
    options: &AggregateOptions<'_>,
) -> Vec<FrequencyEntry> {
    aggregate(records, |r| field.value(r), options)
}

/// Top countries by number of titles.
pub fn country_distribution(
    records: &[CleanRecord],
    top_n: usize,
    placeholders: &Placeholders,
) -> Vec<FrequencyEntry> {
    field_distribution(
        records,
        CategoricalField::Country,
        &AggregateOptions::new(top_n, placeholders),
    )
}

/// Top directors by number of titles.
pub fn director_distribution(
    records: &[CleanRecord],
    top_n: usize,
    placeholders: &Placeholders,
) -> Vec<FrequencyEntry> {
    field_distribution(
        records,
        CategoricalField::Director,
        &AggregateOptions::new(top_n, placeholders),
    )
}

/// Top cast members by number of titles.
pub fn cast_distribution(
    records: &[CleanRecord],
    top_n: usize,
    placeholders: &Placeholders,
) -> Vec<FrequencyEntry> {
    field_distribution(
        records,
        CategoricalField::Cast,
        &AggregateOptions::new(top_n, placeholders),
    )
}

/// Top genre tags.
pub fn genre_distribution(
    records: &[CleanRecord],
    top_n: usize,
    placeholders: &Placeholders,
) -> Vec<FrequencyEntry> {
    field_distribution(
        records,
        CategoricalField::Genre,
        &AggregateOptions::new(top_n, placeholders),
    )
}

/// Rating distribution; blank ratings are counted under `unrated_label`.
pub fn rating_distribution(
    records: &[CleanRecord],
    top_n: usize,
    unrated_label: &str,
) -> Vec<FrequencyEntry> {
    let none = Placeholders::none();
    field_distribution(
        records,
        CategoricalField::Rating,
        &AggregateOptions::new(top_n, &none).with_missing_label(unrated_label),
    )
}
