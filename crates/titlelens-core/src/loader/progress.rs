/// Load progress reporting — messages sent from the loader thread to the
/// caller via a crossbeam channel.
use super::Catalog;
use crate::report::CatalogReport;
use std::time::Duration;

/// Progress updates sent from the loader thread.
///
/// Exactly one of `Complete`, `Failed` or `Cancelled` ends every load.
#[derive(Debug)]
pub enum LoadProgress {
    /// The payload parsed; `rows` raw rows are about to be normalised.
    Parsed { rows: usize },
    /// Normalisation and every aggregation finished.
    Complete {
        catalog: Box<Catalog>,
        report: Box<CatalogReport>,
        duration: Duration,
    },
    /// The payload could not be read or parsed. Terminal; no partial result.
    Failed { message: String },
    /// The caller cancelled before the report was ready.
    Cancelled,
}

impl LoadProgress {
    /// `true` for the message that ends a load.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Parsed { .. })
    }
}
