/// A catalog row exactly as it arrives from the tabular loader.
///
/// Every field is text. Columns missing from the source header (older
/// exports have no `cast` column, for example) deserialise to an empty
/// string rather than failing the whole load.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// Identifier, expected unique across the dataset.
    pub show_id: String,
    /// Content kind, expected `"Movie"` or `"TV Show"` but not validated here.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    /// Comma-separated names, may be empty or a placeholder.
    pub director: String,
    /// Comma-separated names, may be empty.
    pub cast: String,
    /// Comma-separated territory names, may be empty or a placeholder.
    pub country: String,
    /// Free-text date, e.g. `"9/25/2021"` or `"September 25, 2021"`.
    pub date_added: String,
    /// Release year as text; may be empty or non-numeric.
    pub release_year: String,
    pub rating: String,
    /// Carried through untouched; no aggregation reads it.
    pub duration: String,
    /// Comma-separated genre tags.
    pub listed_in: String,
}

impl RawRecord {
    /// Minimal constructor used by tests and callers building rows in memory.
    pub fn new(show_id: &str, kind: &str, title: &str, date_added: &str) -> Self {
        Self {
            show_id: show_id.to_owned(),
            kind: kind.to_owned(),
            title: title.to_owned(),
            date_added: date_added.to_owned(),
            ..Self::default()
        }
    }
}
