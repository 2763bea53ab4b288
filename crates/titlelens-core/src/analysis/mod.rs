/// Analysis modules — aggregations over the clean record set.
///
/// Each function borrows the same immutable `&[CleanRecord]` and returns
/// an owned result, so any of them can run concurrently with the others.
pub mod categorical;
pub mod placeholders;
pub mod summary;
pub mod time_buckets;
pub mod words;

mod tally;

pub use categorical::{
    aggregate, cast_distribution, country_distribution, director_distribution,
    field_distribution, genre_distribution, rating_distribution, AggregateOptions,
    CategoricalField,
};
pub use placeholders::{Placeholders, DEFAULT_PLACEHOLDERS};
pub use summary::{content_type_counts, share_of, DatasetSummary};
pub use time_buckets::{
    bucket_by_month, bucket_by_year, peak, peak_month, peak_year, BucketUnit, TimeBucket,
};
pub use words::{tokenize, word_frequency, WordFrequency, DEFAULT_STOPWORDS};
