/// Analysis configuration — ranking limits, placeholder and stopword lists.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides:
///
/// ```toml
/// top_countries = 15
/// min_word_length = 5
/// ```
use crate::analysis::placeholders::{Placeholders, DEFAULT_PLACEHOLDERS};
use crate::analysis::words::{
    stopword_set, DEFAULT_MIN_WORD_LENGTH, DEFAULT_STOPWORDS, DEFAULT_TOP_WORDS,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub top_countries: usize,
    pub top_directors: usize,
    pub top_cast: usize,
    pub top_genres: usize,
    pub top_ratings: usize,
    pub top_words: usize,
    /// Shortest title word (in characters) that is counted.
    pub min_word_length: usize,
    /// Label counted for a blank rating.
    pub unrated_label: String,
    /// Sentinels excluded from country / director / cast / genre views.
    pub placeholders: Vec<String>,
    pub stopwords: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_countries: 10,
            top_directors: 10,
            top_cast: 10,
            top_genres: 10,
            top_ratings: 8,
            top_words: DEFAULT_TOP_WORDS,
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
            unrated_label: "Unrated".to_owned(),
            placeholders: DEFAULT_PLACEHOLDERS.iter().map(|s| s.to_string()).collect(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Read a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn placeholder_set(&self) -> Placeholders {
        Placeholders::new(self.placeholders.iter().cloned())
    }

    pub fn stopword_set(&self) -> HashSet<String> {
        stopword_set(&self.stopwords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_limits() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.top_countries, 10);
        assert_eq!(cfg.top_ratings, 8);
        assert_eq!(cfg.top_words, 50);
        assert_eq!(cfg.min_word_length, 4);
        assert_eq!(cfg.unrated_label, "Unrated");
        assert!(cfg.placeholder_set().is_placeholder("Not Given"));
        assert!(cfg.stopword_set().contains("the"));
    }

    /// Keys absent from the file keep their defaults.
    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let cfg = AnalysisConfig::from_toml_str("top_countries = 3\nunrated_label = \"NR\"\n")
            .expect("valid toml");
        assert_eq!(cfg.top_countries, 3);
        assert_eq!(cfg.unrated_label, "NR");
        assert_eq!(cfg.top_directors, 10);
        assert_eq!(cfg.stopwords, AnalysisConfig::default().stopwords);
    }

    #[test]
    fn empty_toml_is_default() {
        let cfg = AnalysisConfig::from_toml_str("").expect("valid toml");
        assert_eq!(cfg, AnalysisConfig::default());
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(AnalysisConfig::from_toml_str("top_words = \"many\"").is_err());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let err = AnalysisConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
