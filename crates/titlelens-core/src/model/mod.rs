/// Data model for the catalog pipeline.
///
/// Raw rows from the loader, clean records from the normaliser, and the
/// frequency entries every aggregator produces.
pub mod clean_record;
pub mod format;
pub mod frequency;
pub mod raw_record;

pub use clean_record::{CleanRecord, ContentKind};
pub use frequency::FrequencyEntry;
pub use raw_record::RawRecord;
