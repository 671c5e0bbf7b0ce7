use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use super::model::NewsRecord;
use crate::error::{AnalysisError, Result};
use crate::time_util;

/// Column positions of the news file.
struct NewsColumns {
    publisher: usize,
    headline: usize,
    publish_day: Option<usize>,
    hour: Option<usize>,
    day_of_week: Option<usize>,
    date: Option<usize>,
}

impl NewsColumns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| find(name).ok_or_else(|| AnalysisError::MissingField(name.to_string()));

        let columns = Self {
            publisher: require("publisher")?,
            headline: require("headline")?,
            publish_day: find("publish_day"),
            hour: find("hour"),
            day_of_week: find("day_of_week"),
            date: find("date"),
        };
        // 派生列缺失时需要原始时间列
        let derived = columns.publish_day.is_some() && columns.hour.is_some() && columns.day_of_week.is_some();
        if !derived && columns.date.is_none() {
            let missing = ["publish_day", "hour", "day_of_week"]
                .into_iter()
                .find(|name| find(name).is_none())
                .unwrap_or("date");
            return Err(AnalysisError::MissingField(missing.to_string()));
        }
        Ok(columns)
    }
}

fn cell(record: &StringRecord, idx: Option<usize>) -> Option<&str> {
    idx.and_then(|i| record.get(i)).filter(|v| !v.trim().is_empty())
}

/// Loads the news dataset.
///
/// Uses the `publish_day`, `hour` and `day_of_week` columns when present, otherwise
/// derives all three from a raw `date` timestamp column. Empty cells become `None`.
pub fn load_news<P: AsRef<Path>>(path: P) -> Result<Vec<NewsRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalysisError::ResourceNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let columns = NewsColumns::resolve(reader.headers()?)?;

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let timestamp = match cell(&record, columns.date) {
            Some(v) => Some(time_util::parse_date_time(v).ok_or_else(|| {
                AnalysisError::Parse(format!("row {}: invalid date {:?}", row + 1, v))
            })?),
            None => None,
        };

        let publish_day = match cell(&record, columns.publish_day) {
            Some(v) => Some(time_util::parse_date(v).ok_or_else(|| {
                AnalysisError::Parse(format!("row {}: invalid publish_day {:?}", row + 1, v))
            })?),
            None => timestamp.map(|dt| dt.date()),
        };
        let hour = match cell(&record, columns.hour) {
            Some(v) => Some(parse_hour(v).ok_or_else(|| {
                AnalysisError::Parse(format!("row {}: invalid hour {:?}", row + 1, v))
            })?),
            None => timestamp.as_ref().map(time_util::hour_of),
        };
        let day_of_week = match cell(&record, columns.day_of_week) {
            Some(v) => Some(v.trim().to_string()),
            None => timestamp.as_ref().map(|dt| time_util::weekday_of(dt).to_string()),
        };

        records.push(NewsRecord {
            publisher: cell(&record, Some(columns.publisher)).map(str::to_string),
            headline: cell(&record, Some(columns.headline)).map(str::to_string),
            publish_day,
            hour,
            day_of_week,
        });
    }

    info!("loaded {} news records from {}", records.len(), path.display());
    Ok(records)
}

/// Accepts `9` as well as the `9.0` written by float-typed exports.
fn parse_hour(v: &str) -> Option<u8> {
    let v = v.trim();
    let hour = v
        .parse::<u8>()
        .ok()
        .or_else(|| v.parse::<f64>().ok().filter(|h| h.fract() == 0.0 && *h >= 0.0).map(|h| h as u8))?;
    (hour < 24).then_some(hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hour() {
        assert_eq!(parse_hour("9"), Some(9));
        assert_eq!(parse_hour("23.0"), Some(23));
        assert_eq!(parse_hour("24"), None);
        assert_eq!(parse_hour("x"), None);
    }
}
