/// Catalog report — every aggregate view computed from one clean set.
///
/// The report is an immutable snapshot handed to presentation. The
/// aggregators share nothing but the borrowed record slice, so they are
/// fanned out with rayon and joined back into one value.
use crate::analysis::categorical::{field_distribution, rating_distribution, AggregateOptions};
use crate::analysis::summary::{content_type_counts, share_of, DatasetSummary};
use crate::analysis::time_buckets::{
    bucket_by_month, bucket_by_year, peak_month, peak_year, TimeBucket,
};
use crate::analysis::words::{tokenize, WordFrequency};
use crate::analysis::CategoricalField;
use crate::config::AnalysisConfig;
use crate::model::{CleanRecord, FrequencyEntry};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Views in report order.
pub const CATEGORY_FIELDS: [CategoricalField; 5] = [
    CategoricalField::Country,
    CategoricalField::Director,
    CategoricalField::Cast,
    CategoricalField::Genre,
    CategoricalField::Rating,
];

/// One ranked categorical view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub field: CategoricalField,
    pub entries: Vec<FrequencyEntry>,
}

/// Month and year axes with their peaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeViews {
    /// Always twelve buckets.
    pub monthly: Vec<TimeBucket>,
    pub yearly: Vec<TimeBucket>,
    pub peak_month: TimeBucket,
    pub peak_year: TimeBucket,
}

impl TimeViews {
    pub fn compute(records: &[CleanRecord]) -> Self {
        let monthly = bucket_by_month(records);
        let yearly = bucket_by_year(records);
        Self {
            peak_month: peak_month(&monthly),
            peak_year: peak_year(&yearly),
            monthly,
            yearly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub summary: DatasetSummary,
    /// Movies vs TV shows.
    pub content_types: Vec<FrequencyEntry>,
    pub categories: Vec<CategoryView>,
    pub time: TimeViews,
    pub words: WordFrequency,
}

impl CatalogReport {
    /// Run every aggregation over `records`.
    ///
    /// `original_count` is the number of raw rows before normalisation and
    /// only feeds the summary's removed-row count.
    pub fn build(original_count: usize, records: &[CleanRecord], config: &AnalysisConfig) -> Self {
        let ((summary, content_types), (categories, (time, words))) = rayon::join(
            || {
                (
                    DatasetSummary::compute(original_count, records),
                    content_type_counts(records),
                )
            },
            || {
                rayon::join(
                    || category_views(records, config),
                    || {
                        rayon::join(
                            || TimeViews::compute(records),
                            || {
                                tokenize(
                                    records,
                                    &config.stopword_set(),
                                    config.min_word_length,
                                    config.top_words,
                                )
                            },
                        )
                    },
                )
            },
        );

        debug!(
            records = records.len(),
            years = time.yearly.len(),
            words = words.unique_words,
            "built catalog report"
        );

        Self {
            summary,
            content_types,
            categories,
            time,
            words,
        }
    }

    /// Entries for one categorical view; empty if the view is absent.
    pub fn category(&self, field: CategoricalField) -> &[FrequencyEntry] {
        self.categories
            .iter()
            .find(|v| v.field == field)
            .map(|v| v.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Share of the clean catalog carrying `label` in `field`, as ranked.
    ///
    /// Reads the truncated view, so a label outside the top N reports `0.0`.
    pub fn category_share(&self, field: CategoricalField, label: &str) -> f64 {
        share_of(self.category(field), label, self.summary.clean_count)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Limit configured for `field`.
fn top_n_for(config: &AnalysisConfig, field: CategoricalField) -> usize {
    match field {
        CategoricalField::Country => config.top_countries,
        CategoricalField::Director => config.top_directors,
        CategoricalField::Cast => config.top_cast,
        CategoricalField::Genre => config.top_genres,
        CategoricalField::Rating => config.top_ratings,
    }
}

fn category_views(records: &[CleanRecord], config: &AnalysisConfig) -> Vec<CategoryView> {
    let placeholders = config.placeholder_set();
    CATEGORY_FIELDS
        .par_iter()
        .map(|&field| {
            let top_n = top_n_for(config, field);
            let entries = match field {
                CategoricalField::Rating => {
                    rating_distribution(records, top_n, &config.unrated_label)
                }
                _ => field_distribution(
                    records,
                    field,
                    &AggregateOptions::new(top_n, &placeholders),
                ),
            };
            CategoryView { field, entries }
        })
        .collect()
}
