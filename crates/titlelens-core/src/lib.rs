/// TitleLens Core — catalog ingestion, normalisation and aggregation.
///
/// This crate contains all business logic with zero presentation
/// dependencies. Rendering layers consume the plain data structures it
/// returns and never hand anything back.
///
/// # Modules
///
/// - [`model`] — Raw rows, clean records, frequency entries, formatting helpers.
/// - [`normalize`] — Deduplication, date derivation and row filtering.
/// - [`analysis`] — Categorical top-N, time buckets, title word frequency, summary.
/// - [`report`] — All views over one clean set, computed in parallel.
/// - [`loader`] — CSV payload parsing and the background load handle.
/// - [`config`] — Ranking limits, placeholder and stopword lists.
pub mod analysis;
pub mod config;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod report;

pub use config::AnalysisConfig;
pub use loader::{load_catalog, Catalog, LoadError};
pub use model::{CleanRecord, FrequencyEntry, RawRecord};
pub use normalize::normalize;
pub use report::CatalogReport;
