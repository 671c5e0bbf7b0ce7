//! Daily, hourly and weekly publication distributions.

use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::headline::median_of_sorted;
use super::model::NewsRecord;
use crate::time_util::{parse_weekday_name, WEEK_DAYS};

/// Hours counted as business hours, 9:00 up to the 16:00 bucket.
pub const BUSINESS_HOURS: RangeInclusive<u8> = 9..=16;

pub const DEFAULT_TOP_DAYS: usize = 10;

/// Articles per calendar day, ascending by day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyPattern {
    pub counts: Vec<(NaiveDate, usize)>,
    pub first_day: Option<NaiveDate>,
    pub last_day: Option<NaiveDate>,
    pub mean_per_day: Option<f64>,
    pub median_per_day: Option<f64>,
    pub max_per_day: Option<usize>,
    pub min_per_day: Option<usize>,
    /// Busiest days, ties kept in date order.
    pub busiest_days: Vec<(NaiveDate, usize)>,
}

impl DailyPattern {
    pub fn total_days(&self) -> usize {
        self.counts.len()
    }
}

pub fn analyze_daily_patterns(records: &[NewsRecord], top_n: usize) -> DailyPattern {
    let mut by_day: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for day in records.iter().filter_map(|r| r.publish_day) {
        *by_day.entry(day).or_insert(0) += 1;
    }
    let counts: Vec<(NaiveDate, usize)> = by_day.into_iter().collect();
    debug!("daily patterns: {} distinct days", counts.len());

    if counts.is_empty() {
        return DailyPattern::default();
    }

    let mut values: Vec<usize> = counts.iter().map(|(_, c)| *c).collect();
    let sum: usize = values.iter().sum();
    let mean = sum as f64 / values.len() as f64;
    values.sort_unstable();

    let mut busiest = counts.clone();
    busiest.sort_by(|a, b| b.1.cmp(&a.1));
    busiest.truncate(top_n);

    DailyPattern {
        first_day: counts.first().map(|(d, _)| *d),
        last_day: counts.last().map(|(d, _)| *d),
        mean_per_day: Some(mean),
        median_per_day: Some(median_of_sorted(&values)),
        max_per_day: values.last().copied(),
        min_per_day: values.first().copied(),
        busiest_days: busiest,
        counts,
    }
}

/// Articles per hour of day; only hours that occur are listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyPattern {
    pub counts: Vec<(u8, usize)>,
    pub business_hours: usize,
    pub after_hours: usize,
    pub business_hours_pct: Option<f64>,
}

impl HourlyPattern {
    pub fn total(&self) -> usize {
        self.business_hours + self.after_hours
    }

    pub fn count(&self, hour: u8) -> usize {
        self.counts
            .iter()
            .find(|(h, _)| *h == hour)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}

pub fn analyze_hourly_patterns(records: &[NewsRecord]) -> HourlyPattern {
    let mut by_hour: BTreeMap<u8, usize> = BTreeMap::new();
    for hour in records.iter().filter_map(|r| r.hour) {
        *by_hour.entry(hour).or_insert(0) += 1;
    }

    let business_hours: usize = by_hour
        .iter()
        .filter(|(h, _)| BUSINESS_HOURS.contains(*h))
        .map(|(_, c)| c)
        .sum();
    let total: usize = by_hour.values().sum();
    let after_hours = total - business_hours;
    debug!("hourly patterns: {} hours present, {} articles", by_hour.len(), total);

    HourlyPattern {
        counts: by_hour.into_iter().collect(),
        business_hours,
        after_hours,
        business_hours_pct: percentage(business_hours, total),
    }
}

/// Articles per weekday, always all seven days Monday first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPattern {
    pub counts: [usize; 7],
    pub weekday_articles: usize,
    pub weekend_articles: usize,
    pub weekday_pct: Option<f64>,
}

impl WeeklyPattern {
    pub fn count(&self, day: Weekday) -> usize {
        self.counts[day.num_days_from_monday() as usize]
    }

    /// `(name, count)` pairs Monday through Sunday.
    pub fn named_counts(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        WEEK_DAYS.iter().copied().zip(self.counts.iter().copied())
    }
}

/// Builds the weekly pattern from already aggregated `(day name, count)` pairs.
///
/// Names other than the seven English weekday names are dropped.
pub fn weekly_from_counts<'a, I>(named_counts: I) -> WeeklyPattern
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let mut counts = [0usize; 7];
    for (name, count) in named_counts {
        if let Some(day) = parse_weekday_name(name) {
            counts[day.num_days_from_monday() as usize] += count;
        }
    }
    let weekday_articles: usize = counts[..5].iter().sum();
    let weekend_articles: usize = counts[5..].iter().sum();

    WeeklyPattern {
        counts,
        weekday_articles,
        weekend_articles,
        weekday_pct: percentage(weekday_articles, weekday_articles + weekend_articles),
    }
}

pub fn analyze_weekly_patterns(records: &[NewsRecord]) -> WeeklyPattern {
    let mut by_name: HashMap<&str, usize> = HashMap::new();
    for name in records.iter().filter_map(|r| r.day_of_week.as_deref()) {
        *by_name.entry(name).or_insert(0) += 1;
    }
    debug!("weekly patterns: {} distinct day names", by_name.len());
    weekly_from_counts(by_name)
}

fn percentage(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64 * 100.0)
    }
}
