use approx::assert_relative_eq;
use news_stock_eda::financial_news::{analyze_headline_patterns, profile_headlines, NewsRecord};

#[test]
fn test_breaking_headline_profile() {
    let p = profile_headlines(&["BREAKING: Fed Raises Rates!! What Now?"]);

    assert_eq!(p.total, 1);
    assert_eq!(p.with_digits, 0);
    assert_eq!(p.with_special_chars, 1);
    assert!(p.all_caps_words >= 1);
    assert_eq!(p.exclamation_marks, 2);
    assert_eq!(p.question_marks, 1);
}

#[test]
fn test_length_statistics() {
    let p = profile_headlines(&["abcd", "ab", "abcdef"]);
    assert_relative_eq!(p.mean_length.unwrap(), 4.0);
    assert_relative_eq!(p.median_length.unwrap(), 4.0);
    assert_eq!(p.max_length, Some(6));
    assert_eq!(p.min_length, Some(2));
}

#[test]
fn test_null_headlines_count_as_empty() {
    let records = vec![
        NewsRecord::builder().headline("Apple Q3 earnings beat").build(),
        NewsRecord::default(),
    ];
    let p = analyze_headline_patterns(&records);
    assert_eq!(p.total, 2);
    assert_eq!(p.empty, 1);
    assert_eq!(p.with_digits, 1);
    assert_eq!(p.min_length, Some(0));
}

#[test]
fn test_no_headlines() {
    let p = profile_headlines::<&str>(&[]);
    assert_eq!(p.total, 0);
    assert_eq!(p.mean_length, None);
    assert_eq!(p.max_length, None);
}
