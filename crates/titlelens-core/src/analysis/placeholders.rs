/// Placeholder (sentinel) values that mean "no value" in categorical columns.
///
/// Comparison is exact against the trimmed text, so each spelling that
/// occurs in the wild is listed separately.
use std::collections::HashSet;

/// Sentinels seen in catalog exports for absent directors and countries.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &[
    "Not Given",
    "not given",
    "NOT GIVEN",
    "Unknown",
    "unknown",
    "N/A",
    "n/a",
    "NaN",
    "nan",
    "None",
    "null",
    "NULL",
];

/// A set of sentinel strings excluded from aggregation.
///
/// Blank text is always treated as a placeholder whether or not `""` is in
/// the set.
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    values: HashSet<String>,
}

impl Placeholders {
    /// An empty set: only blank text counts as missing.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` when `value` is blank or exactly one of the sentinels.
    pub fn is_placeholder(&self, value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty() || self.values.contains(trimmed)
    }
}
