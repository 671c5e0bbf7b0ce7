use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};

/// Weekday names in reporting order.
pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEK_DAYS[day.num_days_from_monday() as usize]
}

/// Exact, case-sensitive lookup of an English weekday name.
pub fn parse_weekday_name(name: &str) -> Option<Weekday> {
    match name {
        "Monday" => Some(Weekday::Mon),
        "Tuesday" => Some(Weekday::Tue),
        "Wednesday" => Some(Weekday::Wed),
        "Thursday" => Some(Weekday::Thu),
        "Friday" => Some(Weekday::Fri),
        "Saturday" => Some(Weekday::Sat),
        "Sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Parses a timestamp string into a local wall-clock date-time.
///
/// Accepts `2020-06-05 10:30:54-04:00`, RFC 3339, `2020-06-05 10:30:54` and plain
/// `2020-06-05` (midnight). The offset, when present, is kept as wall-clock time and
/// not converted to UTC.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%:z") {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    parse_date(s).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parses the calendar day of a date or date-time string.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    // 日期时间格式：只取日期部分
    if s.len() > 10 && s.is_char_boundary(10) {
        if let Ok(d) = NaiveDate::parse_from_str(&s[..10], "%Y-%m-%d") {
            return Some(d);
        }
    }
    None
}

pub fn hour_of(dt: &NaiveDateTime) -> u8 {
    dt.hour() as u8
}

pub fn weekday_of(dt: &NaiveDateTime) -> &'static str {
    weekday_name(dt.weekday())
}

/// Unix seconds to a UTC calendar day.
pub fn unix_seconds_to_date(ts: i64) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp(ts, 0).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset_timestamp_keeps_wall_clock() {
        let dt = parse_date_time("2020-06-05 10:30:54-04:00").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2020, 6, 5).unwrap());
        assert_eq!(hour_of(&dt), 10);
        assert_eq!(weekday_of(&dt), "Friday");
    }

    #[test]
    fn test_parse_date_variants() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 1);
        assert_eq!(parse_date("2021-03-01"), expected);
        assert_eq!(parse_date("2021-03-01 00:00:00-05:00"), expected);
        assert_eq!(parse_date("03/01/2021"), None);
    }

    #[test]
    fn test_weekday_names_round_trip() {
        for name in WEEK_DAYS {
            let day = parse_weekday_name(name).unwrap();
            assert_eq!(weekday_name(day), name);
        }
        assert_eq!(parse_weekday_name("monday"), None);
    }

    #[test]
    fn test_unix_seconds_to_date() {
        assert_eq!(unix_seconds_to_date(0), NaiveDate::from_ymd_opt(1970, 1, 1));
    }
}
