use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One article row of the news dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub publisher: Option<String>,
    pub headline: Option<String>,
    pub publish_day: Option<NaiveDate>,
    pub hour: Option<u8>,
    pub day_of_week: Option<String>,
}

impl NewsRecord {
    pub fn builder() -> NewsRecordBuilder {
        NewsRecordBuilder::default()
    }

    /// Headline with null filled as the empty string.
    pub fn headline_or_empty(&self) -> &str {
        self.headline.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Default)]
pub struct NewsRecordBuilder {
    record: NewsRecord,
}

impl NewsRecordBuilder {
    pub fn publisher(mut self, val: impl Into<String>) -> Self {
        self.record.publisher = Some(val.into());
        self
    }

    pub fn headline(mut self, val: impl Into<String>) -> Self {
        self.record.headline = Some(val.into());
        self
    }

    pub fn publish_day(mut self, val: NaiveDate) -> Self {
        self.record.publish_day = Some(val);
        self
    }

    pub fn hour(mut self, val: u8) -> Self {
        self.record.hour = Some(val);
        self
    }

    pub fn day_of_week(mut self, val: impl Into<String>) -> Self {
        self.record.day_of_week = Some(val.into());
        self
    }

    pub fn build(self) -> NewsRecord {
        self.record
    }
}

/// Label counts ordered most frequent first.
///
/// Equal counts keep the order in which the labels were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();
        for value in values {
            let value = value.as_ref();
            match index.get(value) {
                Some(&pos) => entries[pos].1 += 1,
                None => {
                    index.insert(value.to_string(), entries.len());
                    entries.push((value.to_string(), 1));
                }
            }
        }
        // sort_by is stable, first-seen order survives among ties
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, c)| *c)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }
}
