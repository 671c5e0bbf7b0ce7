use chrono::NaiveDate;
use news_stock_eda::stock::{ChartRenderer, IndicatorCalculator, PriceSeries, ReturnSeries};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap()
}

fn analysed_series(n: usize) -> PriceSeries {
    let closes: Vec<f64> = (0..n).map(|i| 100.0 + (i as f64 / 4.0).cos() * 3.0).collect();
    let mut series = PriceSeries::from_closes("MSFT", start(), &closes);
    IndicatorCalculator::default().calculate_all(&mut series).unwrap();
    series
}

#[test]
fn test_charts_carry_titles() {
    let renderer = ChartRenderer::new(140, 30);
    let series = analysed_series(120);

    assert!(renderer.plot_stock_price(&series).contains("Close Price with SMA & EMA for MSFT"));
    assert!(renderer.plot_rsi(&series).contains("Relative Strength Index (RSI) - MSFT"));
    assert!(renderer.plot_macd(&series).contains("MACD & Signal Line - MSFT"));
}

#[test]
fn test_chart_dimensions() {
    let renderer = ChartRenderer::new(100, 20);
    let chart = renderer.plot_rsi(&analysed_series(60));
    assert_eq!(chart.lines().count(), 20);
    assert!(chart.lines().all(|l| l.chars().count() <= 100));
}

#[test]
fn test_empty_series_does_not_panic() {
    let renderer = ChartRenderer::default();
    let empty = PriceSeries::new("EMPTY", Vec::new());
    assert!(!renderer.plot_stock_price(&empty).is_empty());
    assert!(!renderer.plot_rsi(&empty).is_empty());
    assert!(!renderer.plot_macd(&empty).is_empty());
}

#[test]
fn test_returns_chart() {
    let closes = vec![(start(), 10.0), (start().succ_opt().unwrap(), 11.0)];
    let returns = ReturnSeries::from_closes("AAPL", &closes);
    let chart = ChartRenderer::default().plot_stock_returns(&returns);
    assert!(chart.contains("Daily Returns - AAPL"));
}
