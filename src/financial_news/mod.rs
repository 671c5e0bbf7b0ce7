//! Financial-news metadata analysis: publishers, keywords, headlines and timing.

pub mod headline;
pub mod keyword;
pub mod loader;
pub mod model;
pub mod publisher;
pub mod report;
pub mod stop_words;
pub mod temporal;

pub use headline::{analyze_headline_patterns, profile_headlines, HeadlinePatterns};
pub use keyword::{KeywordConfig, KeywordExtractor, KeywordFrequency};
pub use loader::load_news;
pub use model::{FrequencyTable, NewsRecord};
pub use publisher::{DomainPolicy, EmailPublishers};
pub use stop_words::StopWords;
pub use temporal::{DailyPattern, HourlyPattern, WeeklyPattern};

use crate::error::Result;

/// Bundles the configurable news analyses behind one value.
#[derive(Debug, Clone)]
pub struct NewsAnalysis {
    keywords: KeywordExtractor,
    domain_policy: DomainPolicy,
    top_days: usize,
}

impl Default for NewsAnalysis {
    fn default() -> Self {
        Self {
            keywords: KeywordExtractor::default(),
            domain_policy: DomainPolicy::default(),
            top_days: temporal::DEFAULT_TOP_DAYS,
        }
    }
}

impl NewsAnalysis {
    pub fn new(keyword_config: KeywordConfig, domain_policy: DomainPolicy, top_days: usize) -> Result<Self> {
        Ok(Self {
            keywords: KeywordExtractor::new(keyword_config)?,
            domain_policy,
            top_days,
        })
    }

    pub fn analyze_publisher_frequency(&self, records: &[NewsRecord]) -> FrequencyTable {
        publisher::analyze_publisher_frequency(records)
    }

    pub fn extract_email_publishers(&self, records: &[NewsRecord]) -> EmailPublishers {
        publisher::extract_email_publishers(records)
    }

    pub fn extract_email_domains(&self, emails: &EmailPublishers) -> Vec<String> {
        publisher::extract_email_domains(emails)
    }

    pub fn get_organizational_domains(&self, domains: &[String]) -> FrequencyTable {
        self.domain_policy.organizational_domains(domains)
    }

    pub fn analyze_keyword_frequency(&self, records: &[NewsRecord]) -> Result<KeywordFrequency> {
        self.keywords.analyze_keyword_frequency(records)
    }

    pub fn analyze_headline_patterns(&self, records: &[NewsRecord]) -> HeadlinePatterns {
        headline::analyze_headline_patterns(records)
    }

    pub fn analyze_daily_patterns(&self, records: &[NewsRecord]) -> DailyPattern {
        temporal::analyze_daily_patterns(records, self.top_days)
    }

    pub fn analyze_hourly_patterns(&self, records: &[NewsRecord]) -> HourlyPattern {
        temporal::analyze_hourly_patterns(records)
    }

    pub fn analyze_weekly_patterns(&self, records: &[NewsRecord]) -> WeeklyPattern {
        temporal::analyze_weekly_patterns(records)
    }
}
