//! N-gram keyword frequency over headlines.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::NewsRecord;
use super::stop_words::StopWords;
use crate::error::{AnalysisError, Result};

/// Two or more word characters.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Inclusive `(min, max)` n-gram length in words.
    pub ngram_range: (usize, usize),
    /// Vocabulary cap, chosen by total corpus frequency.
    pub max_features: usize,
    pub stop_words: StopWords,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            ngram_range: (2, 3),
            max_features: 30,
            stop_words: StopWords::english(),
        }
    }
}

/// N-gram counts ordered by count descending, ties lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordFrequency {
    pub ngram_range: (usize, usize),
    pub entries: Vec<(String, usize)>,
}

impl KeywordFrequency {
    pub fn get(&self, ngram: &str) -> Option<usize> {
        self.entries.iter().find(|(g, _)| g == ngram).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    config: KeywordConfig,
}

impl KeywordExtractor {
    pub fn new(config: KeywordConfig) -> Result<Self> {
        let (min_n, max_n) = config.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(AnalysisError::InvalidParameter(format!(
                "ngram_range ({}, {}) must satisfy 1 <= min <= max",
                min_n, max_n
            )));
        }
        if config.max_features == 0 {
            return Err(AnalysisError::InvalidParameter(
                "max_features must be at least 1".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Lowercased tokens with stop words removed.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TOKEN_REGEX
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !self.config.stop_words.contains(t))
            .map(str::to_string)
            .collect()
    }

    /// Contiguous n-grams of the filtered tokens for every length in the range.
    pub fn ngrams(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenize(text);
        let (min_n, max_n) = self.config.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n {
            if n > tokens.len() {
                break;
            }
            grams.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        grams
    }

    pub fn count<S: AsRef<str>>(&self, documents: &[S]) -> Result<KeywordFrequency> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            for gram in self.ngrams(doc.as_ref()) {
                *counts.entry(gram).or_insert(0) += 1;
            }
        }
        if counts.is_empty() {
            return Err(AnalysisError::EmptyVocabulary);
        }
        let vocabulary_size = counts.len();

        let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(self.config.max_features);
        debug!(
            "keyword frequency: {} documents, vocabulary {} -> {}",
            documents.len(),
            vocabulary_size,
            entries.len()
        );

        Ok(KeywordFrequency {
            ngram_range: self.config.ngram_range,
            entries,
        })
    }

    /// Counts n-grams over the headline column, null headlines as empty strings.
    pub fn analyze_keyword_frequency(&self, records: &[NewsRecord]) -> Result<KeywordFrequency> {
        let headlines: Vec<&str> = records.iter().map(NewsRecord::headline_or_empty).collect();
        self.count(&headlines)
    }
}
