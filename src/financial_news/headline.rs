//! Text pattern statistics over headlines.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::NewsRecord;

static DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").unwrap());
static SPECIAL_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());
static ALL_CAPS_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{2,}\b").unwrap());

/// Headline statistics.
///
/// `with_digits` and `with_special_chars` count headlines. `all_caps_words`,
/// `question_marks` and `exclamation_marks` sum occurrences across headlines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadlinePatterns {
    pub total: usize,
    pub empty: usize,
    /// Lengths are in characters; all `None` for an empty corpus.
    pub mean_length: Option<f64>,
    pub median_length: Option<f64>,
    pub max_length: Option<usize>,
    pub min_length: Option<usize>,
    pub with_digits: usize,
    pub with_special_chars: usize,
    pub all_caps_words: usize,
    pub question_marks: usize,
    pub exclamation_marks: usize,
}

pub fn profile_headlines<S: AsRef<str>>(headlines: &[S]) -> HeadlinePatterns {
    let mut patterns = HeadlinePatterns {
        total: headlines.len(),
        ..Default::default()
    };
    let mut lengths: Vec<usize> = Vec::with_capacity(headlines.len());

    for headline in headlines {
        let headline = headline.as_ref();
        if headline.is_empty() {
            patterns.empty += 1;
        }
        lengths.push(headline.chars().count());
        if DIGIT_REGEX.is_match(headline) {
            patterns.with_digits += 1;
        }
        if SPECIAL_CHAR_REGEX.is_match(headline) {
            patterns.with_special_chars += 1;
        }
        patterns.all_caps_words += ALL_CAPS_WORD_REGEX.find_iter(headline).count();
        patterns.question_marks += headline.chars().filter(|&c| c == '?').count();
        patterns.exclamation_marks += headline.chars().filter(|&c| c == '!').count();
    }

    if !lengths.is_empty() {
        let sum: usize = lengths.iter().sum();
        patterns.mean_length = Some(sum as f64 / lengths.len() as f64);
        patterns.max_length = lengths.iter().max().copied();
        patterns.min_length = lengths.iter().min().copied();
        lengths.sort_unstable();
        patterns.median_length = Some(median_of_sorted(&lengths));
    }

    debug!("headline patterns over {} headlines", patterns.total);
    patterns
}

/// Null headlines are profiled as empty strings.
pub fn analyze_headline_patterns(records: &[NewsRecord]) -> HeadlinePatterns {
    let headlines: Vec<&str> = records.iter().map(NewsRecord::headline_or_empty).collect();
    profile_headlines(&headlines)
}

/// Median of a non-empty ascending slice.
pub(crate) fn median_of_sorted(sorted: &[usize]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}
