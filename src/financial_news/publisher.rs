//! Publisher frequency and email-domain classification.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{FrequencyTable, NewsRecord};

static EMAIL_DOMAIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9.-]+)").unwrap());

/// Free mail providers that say nothing about the sender's organisation.
pub const PERSONAL_EMAIL_DOMAINS: [&str; 12] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
    "msn.com",
    "live.com",
    "mail.com",
    "yandex.com",
    "zoho.com",
];

/// Counts articles per publisher, nulls excluded.
pub fn analyze_publisher_frequency(records: &[NewsRecord]) -> FrequencyTable {
    let table = FrequencyTable::from_values(records.iter().filter_map(|r| r.publisher.as_deref()));
    debug!("publisher frequency: {} distinct publishers", table.len());
    table
}

/// Publishers that look like email addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailPublishers {
    /// Every matching publisher value, in input order, duplicates kept.
    pub publishers: Vec<String>,
}

impl EmailPublishers {
    pub fn count(&self) -> usize {
        self.publishers.len()
    }

    pub fn unique_count(&self) -> usize {
        self.publishers.iter().collect::<HashSet<_>>().len()
    }

    pub fn sample(&self, n: usize) -> &[String] {
        &self.publishers[..n.min(self.publishers.len())]
    }
}

pub fn extract_email_publishers(records: &[NewsRecord]) -> EmailPublishers {
    let publishers: Vec<String> = records
        .iter()
        .filter_map(|r| r.publisher.as_deref())
        .filter(|p| p.contains('@'))
        .map(str::to_string)
        .collect();
    debug!("email publishers: {}", publishers.len());
    EmailPublishers { publishers }
}

/// Domain part of an email-like publisher, `None` when nothing follows `@`.
pub fn extract_domain(publisher: &str) -> Option<&str> {
    EMAIL_DOMAIN_REGEX
        .captures(publisher)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Extracts one domain per email publisher; non-matching rows are dropped.
pub fn extract_email_domains(emails: &EmailPublishers) -> Vec<String> {
    emails
        .publishers
        .iter()
        .filter_map(|p| extract_domain(p))
        .map(str::to_string)
        .collect()
}

/// Distinct domain count, used by the email report.
pub fn unique_domain_count(domains: &[String]) -> usize {
    domains.iter().collect::<BTreeSet<_>>().len()
}

/// Which domains count as personal mail providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainPolicy {
    pub personal_domains: HashSet<String>,
}

impl Default for DomainPolicy {
    fn default() -> Self {
        Self::new(PERSONAL_EMAIL_DOMAINS)
    }
}

impl DomainPolicy {
    pub fn new<I, S>(personal_domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            personal_domains: personal_domains.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact, case-sensitive membership.
    pub fn is_personal(&self, domain: &str) -> bool {
        self.personal_domains.contains(domain)
    }

    /// Frequency of the domains that are not personal providers.
    pub fn organizational_domains<S: AsRef<str>>(&self, domains: &[S]) -> FrequencyTable {
        let table = FrequencyTable::from_values(
            domains
                .iter()
                .map(AsRef::as_ref)
                .filter(|d| !self.is_personal(d)),
        );
        debug!("organizational domains: {} distinct", table.len());
        table
    }
}
