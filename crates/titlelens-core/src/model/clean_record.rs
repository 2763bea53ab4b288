/// A record that survived normalisation.
///
/// Carries every raw field plus the calendar decomposition of `date_added`.
/// Instances are only produced by [`crate::normalize::normalize`] and are
/// never mutated afterwards; every aggregator borrows the same slice.
use super::raw_record::RawRecord;
use serde::Serialize;

/// The two content kinds the time buckets split on.
///
/// Anything that is not exactly `"Movie"` or `"TV Show"` is `Other`; the
/// normaliser keeps such rows, the kind split simply does not count them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ContentKind {
    Movie,
    TvShow,
    Other,
}

impl ContentKind {
    /// Classify the free-text kind column.
    pub fn from_text(kind: &str) -> Self {
        match kind {
            "Movie" => Self::Movie,
            "TV Show" => Self::TvShow,
            _ => Self::Other,
        }
    }

    /// Plural label used by the distribution views.
    pub fn label(self) -> &'static str {
        match self {
            Self::Movie => "Movies",
            Self::TvShow => "TV Shows",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanRecord {
    pub show_id: String,
    pub kind: String,
    pub title: String,
    pub director: String,
    pub cast: String,
    pub country: String,
    /// Original text, kept verbatim so a clean set can be fed back as raw rows.
    pub date_added: String,
    /// Coerced release year; `0` when the source text was not numeric.
    pub release_year: i32,
    pub rating: String,
    pub duration: String,
    pub listed_in: String,

    // Derived from `date_added`.
    pub year_added: i32,
    /// 1–12.
    pub month_added: u32,
    pub day_added: u32,
}

impl CleanRecord {
    #[inline]
    pub fn content_kind(&self) -> ContentKind {
        ContentKind::from_text(&self.kind)
    }

    /// Reinterpret as a raw row (release year rendered back to text).
    pub fn to_raw(&self) -> RawRecord {
        RawRecord {
            show_id: self.show_id.clone(),
            kind: self.kind.clone(),
            title: self.title.clone(),
            director: self.director.clone(),
            cast: self.cast.clone(),
            country: self.country.clone(),
            date_added: self.date_added.clone(),
            release_year: self.release_year.to_string(),
            rating: self.rating.clone(),
            duration: self.duration.clone(),
            listed_in: self.listed_in.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_kind_matches_exact_labels_only() {
        assert_eq!(ContentKind::from_text("Movie"), ContentKind::Movie);
        assert_eq!(ContentKind::from_text("TV Show"), ContentKind::TvShow);
        assert_eq!(ContentKind::from_text("movie"), ContentKind::Other);
        assert_eq!(ContentKind::from_text(""), ContentKind::Other);
    }

    #[test]
    fn content_kind_labels_are_plural() {
        assert_eq!(ContentKind::Movie.label(), "Movies");
        assert_eq!(ContentKind::TvShow.label(), "TV Shows");
    }
}
