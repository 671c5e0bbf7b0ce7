use chrono::NaiveDate;
use news_stock_eda::financial_news::publisher::{extract_email_domains, extract_email_publishers};
use news_stock_eda::financial_news::report::{DomainSummary, TopTable};
use news_stock_eda::financial_news::temporal::{
    analyze_daily_patterns, analyze_hourly_patterns, analyze_weekly_patterns,
};
use news_stock_eda::financial_news::{
    analyze_headline_patterns, FrequencyTable, KeywordConfig, KeywordExtractor, NewsRecord, StopWords,
};
use news_stock_eda::stock::{IndicatorCalculator, PriceSeries};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 6, d).unwrap()
}

fn records() -> Vec<NewsRecord> {
    vec![
        NewsRecord::builder()
            .publisher("Benzinga")
            .headline("Why Is AAPL Up Today?")
            .publish_day(day(5))
            .hour(10)
            .day_of_week("Friday")
            .build(),
        NewsRecord::builder()
            .publisher("desk@corp.io")
            .headline("Stocks Moving In Friday's Session!")
            .publish_day(day(6))
            .hour(20)
            .day_of_week("Saturday")
            .build(),
    ]
}

#[test]
fn test_news_reports_render() {
    let records = records();

    let publishers = FrequencyTable::from_values(records.iter().filter_map(|r| r.publisher.as_deref()));
    let top = TopTable {
        title: "Publishers",
        table: &publishers,
        top_n: 10,
    }
    .to_string();
    assert!(top.contains("--- Top 10 Publishers ---"));
    assert!(top.contains("Benzinga"));

    let emails = extract_email_publishers(&records);
    let email_report = emails.to_string();
    assert!(email_report.contains("Number of email publishers: 1"));
    assert!(email_report.contains("desk@corp.io"));

    let domains = extract_email_domains(&emails);
    let domain_report = DomainSummary(&domains).to_string();
    assert!(domain_report.contains("Total domains: 1"));
    assert!(domain_report.contains("Unique domains: 1"));

    let headlines = analyze_headline_patterns(&records).to_string();
    assert!(headlines.contains("--- Headline Pattern Analysis ---"));
    assert!(headlines.contains("Question marks: 1"));
    assert!(headlines.contains("Exclamation marks: 1"));

    let daily = analyze_daily_patterns(&records, 10).to_string();
    assert!(daily.contains("Date range: 2020-06-05 to 2020-06-06"));

    let hourly = analyze_hourly_patterns(&records).to_string();
    assert!(hourly.contains("Business hours (9 AM - 5 PM): 1 articles"));
    assert!(hourly.contains("Business hours percentage: 50.0%"));

    let weekly = analyze_weekly_patterns(&records).to_string();
    assert!(weekly.contains("Weekday articles: 1"));
    assert!(weekly.contains("Weekend articles: 1"));
    assert!(weekly.contains("Sunday"));
}

#[test]
fn test_empty_reports_print_placeholders() {
    let records: Vec<NewsRecord> = Vec::new();

    let headlines = analyze_headline_patterns(&records).to_string();
    assert!(headlines.contains("Average headline length: n/a characters"));
    assert!(headlines.contains("Max headline length: n/a characters"));

    let daily = analyze_daily_patterns(&records, 10).to_string();
    assert!(daily.contains("Date range: n/a to n/a"));
    assert!(daily.contains("Top 0 busiest days:"));

    assert!(analyze_hourly_patterns(&records)
        .to_string()
        .contains("Business hours percentage: n/a%"));
    assert!(analyze_weekly_patterns(&records)
        .to_string()
        .contains("Weekday percentage: n/a%"));

    let emails = extract_email_publishers(&records);
    assert!(emails.to_string().contains("Number of email publishers: 0"));
    assert!(DomainSummary(&[]).to_string().contains("Total domains: 0"));

    let empty = FrequencyTable::default();
    let top = TopTable {
        title: "Publishers",
        table: &empty,
        top_n: 5,
    };
    assert_eq!(top.to_string().trim(), "--- Top 5 Publishers ---");
}

#[test]
fn test_keyword_report_lists_ngrams() {
    let config = KeywordConfig {
        ngram_range: (1, 2),
        max_features: 5,
        stop_words: StopWords::none(),
    };
    let freq = KeywordExtractor::new(config)
        .unwrap()
        .count(&["earnings beat", "earnings miss"])
        .unwrap();
    let report = freq.to_string();
    assert!(report.contains("Keywords (n-grams (1, 2))"));
    assert!(report.contains("earnings"));
}

#[test]
fn test_price_series_summary() {
    let empty = PriceSeries::new("EMPTY", Vec::new());
    let text = empty.to_string();
    assert!(text.contains("--- EMPTY (0 bars) ---"));
    assert!(text.contains("no data"));

    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let mut series = PriceSeries::from_closes("AAPL", day(1), &closes);
    let raw = series.to_string();
    assert!(raw.contains("close 159.00  sma -"));

    IndicatorCalculator::default().calculate_all(&mut series).unwrap();
    let text = series.to_string();
    assert!(text.contains("--- AAPL (60 bars) ---"));
    assert!(text.contains("sma 149.50"));
    assert!(text.contains("rsi 100.00"));
}
