//! Console formatting of the news analysis results.
//!
//! Computation never prints; callers format a result with `Display` (or serialize
//! it with serde) when and where they want.

use std::fmt::{self, Display, Formatter};

use super::headline::HeadlinePatterns;
use super::keyword::KeywordFrequency;
use super::model::FrequencyTable;
use super::publisher::{unique_domain_count, EmailPublishers};
use super::temporal::{DailyPattern, HourlyPattern, WeeklyPattern};

const SAMPLE_SIZE: usize = 10;

fn fmt_opt_f64(v: Option<f64>, precision: usize) -> String {
    v.map(|x| format!("{:.*}", precision, x)).unwrap_or_else(|| "n/a".to_string())
}

fn fmt_opt<T: Display>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_else(|| "n/a".to_string())
}

/// A titled top-n view of a frequency table.
pub struct TopTable<'a> {
    pub title: &'a str,
    pub table: &'a FrequencyTable,
    pub top_n: usize,
}

impl Display for TopTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Top {} {} ---", self.top_n, self.title)?;
        let width = self.table.top(self.top_n).iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
        for (label, count) in self.table.top(self.top_n) {
            writeln!(f, "{:<width$}  {}", label, count, width = width)?;
        }
        Ok(())
    }
}

impl Display for EmailPublishers {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Email Publishers ---")?;
        writeln!(f, "Number of email publishers: {}", self.count())?;
        writeln!(f, "Unique email publishers: {}", self.unique_count())?;
        writeln!(f, "\nSample email publishers:")?;
        writeln!(f, "{:?}", self.sample(SAMPLE_SIZE))
    }
}

/// Summary line pair for extracted domains.
pub struct DomainSummary<'a>(pub &'a [String]);

impl Display for DomainSummary<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Email Domains ---")?;
        writeln!(f, "Total domains: {}", self.0.len())?;
        writeln!(f, "Unique domains: {}", unique_domain_count(self.0))
    }
}

impl Display for KeywordFrequency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\n--- Top {} Keywords (n-grams {:?}) ---",
            self.entries.len(),
            self.ngram_range
        )?;
        let width = self.entries.iter().map(|(g, _)| g.chars().count()).max().unwrap_or(0);
        for (gram, count) in &self.entries {
            writeln!(f, "{:<width$}  {}", gram, count, width = width)?;
        }
        Ok(())
    }
}

impl Display for HeadlinePatterns {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Headline Pattern Analysis ---")?;
        writeln!(f, "Total headlines: {}", self.total)?;
        writeln!(f, "Empty headlines: {}", self.empty)?;
        writeln!(f, "Average headline length: {} characters", fmt_opt_f64(self.mean_length, 2))?;
        writeln!(f, "Median headline length: {} characters", fmt_opt_f64(self.median_length, 2))?;
        writeln!(f, "Max headline length: {} characters", fmt_opt(self.max_length))?;
        writeln!(f, "Min headline length: {} characters", fmt_opt(self.min_length))?;
        writeln!(f, "Headlines with numbers: {}", self.with_digits)?;
        writeln!(f, "Headlines with special characters: {}", self.with_special_chars)?;
        writeln!(f, "All caps words: {}", self.all_caps_words)?;
        writeln!(f, "Question marks: {}", self.question_marks)?;
        writeln!(f, "Exclamation marks: {}", self.exclamation_marks)
    }
}

impl Display for DailyPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Daily Publication Patterns ---")?;
        writeln!(f, "Total days with publications: {}", self.total_days())?;
        writeln!(f, "Date range: {} to {}", fmt_opt(self.first_day), fmt_opt(self.last_day))?;
        writeln!(f, "Average articles per day: {}", fmt_opt_f64(self.mean_per_day, 2))?;
        writeln!(f, "Median articles per day: {}", fmt_opt_f64(self.median_per_day, 2))?;
        writeln!(f, "Max articles in a day: {}", fmt_opt(self.max_per_day))?;
        writeln!(f, "Min articles in a day: {}", fmt_opt(self.min_per_day))?;
        writeln!(f, "\nTop {} busiest days:", self.busiest_days.len())?;
        for (day, count) in &self.busiest_days {
            writeln!(f, "{}  {}", day, count)?;
        }
        Ok(())
    }
}

impl Display for HourlyPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Hourly Publication Patterns ---")?;
        writeln!(f, "Articles published by hour:")?;
        for (hour, count) in &self.counts {
            writeln!(f, "{:>2}  {}", hour, count)?;
        }
        writeln!(f, "\nBusiness hours (9 AM - 5 PM): {} articles", self.business_hours)?;
        writeln!(f, "After hours: {} articles", self.after_hours)?;
        writeln!(f, "Business hours percentage: {}%", fmt_opt_f64(self.business_hours_pct, 1))
    }
}

impl Display for WeeklyPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n--- Weekly Publication Patterns ---")?;
        writeln!(f, "Articles published by day of week:")?;
        for (name, count) in self.named_counts() {
            writeln!(f, "{:<9}  {}", name, count)?;
        }
        writeln!(f, "\nWeekday articles: {}", self.weekday_articles)?;
        writeln!(f, "Weekend articles: {}", self.weekend_articles)?;
        writeln!(f, "Weekday percentage: {}%", fmt_opt_f64(self.weekday_pct, 1))
    }
}
