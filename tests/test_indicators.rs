use approx::assert_relative_eq;
use chrono::NaiveDate;
use news_stock_eda::stock::indicator::{ema, macd, rsi, sma};
use news_stock_eda::stock::{IndicatorCalculator, IndicatorConfig, PriceSeries};
use news_stock_eda::AnalysisError;

fn sample_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            100.0 + 5.0 * (x / 3.0).sin() + 0.1 * x
        })
        .collect()
}

fn series(closes: &[f64]) -> PriceSeries {
    PriceSeries::from_closes("TEST", NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(), closes)
}

#[test]
fn test_sma_window_three() {
    let values = sma(&[10.0, 20.0, 30.0, 40.0], 3).unwrap();
    assert_eq!(values[0], None);
    assert_eq!(values[1], None);
    assert_relative_eq!(values[2].unwrap(), 20.0);
    assert_relative_eq!(values[3].unwrap(), 30.0);
}

#[test]
fn test_ema_seeded_with_sma() {
    let values = ema(&[1.0, 2.0, 3.0, 6.0], 3).unwrap();
    assert_eq!(&values[..2], &[None, None]);
    assert_relative_eq!(values[2].unwrap(), 2.0);
    assert_relative_eq!(values[3].unwrap(), 4.0);
}

#[test]
fn test_rsi_bounds_and_lookback() {
    let closes = sample_closes(120);
    let values = rsi(&closes, 14).unwrap();

    assert!(values[..14].iter().all(Option::is_none));
    for v in values[14..].iter() {
        let v = v.unwrap();
        assert!((0.0..=100.0).contains(&v), "rsi out of range: {}", v);
    }
}

#[test]
fn test_rsi_extremes() {
    let rising: Vec<f64> = (1..=20).map(f64::from).collect();
    assert_relative_eq!(rsi(&rising, 14).unwrap()[19].unwrap(), 100.0);

    let flat = vec![50.0; 20];
    assert_relative_eq!(rsi(&flat, 14).unwrap()[19].unwrap(), 0.0);
}

#[test]
fn test_macd_lookback() {
    let closes = sample_closes(60);
    let points = macd(&closes, 12, 26, 9).unwrap();

    assert!(points[..33].iter().all(Option::is_none));
    let first = points[33].unwrap();
    assert_relative_eq!(first.histogram, first.macd - first.signal, epsilon = 1e-12);
    assert!(points[33..].iter().all(Option::is_some));
}

#[test]
fn test_rsi_reference_values() {
    let values = rsi(&sample_closes(60), 14).unwrap();
    assert_relative_eq!(values[14].unwrap(), 37.6458498202, epsilon = 1e-9);
    assert_relative_eq!(values[59].unwrap(), 67.7757763556, epsilon = 1e-9);
}

#[test]
fn test_macd_reference_values() {
    let points = macd(&sample_closes(60), 12, 26, 9).unwrap();

    let first = points[33].unwrap();
    assert_relative_eq!(first.macd, -0.6219750724, epsilon = 1e-9);
    assert_relative_eq!(first.signal, 0.1666491322, epsilon = 1e-9);

    let last = points[59].unwrap();
    assert_relative_eq!(last.macd, 0.8059140817, epsilon = 1e-9);
    assert_relative_eq!(last.signal, 0.2412392874, epsilon = 1e-9);
    assert_relative_eq!(last.histogram, last.macd - last.signal, epsilon = 1e-12);
}

#[test]
fn test_macd_flat_series_is_zero() {
    let points = macd(&[10.0; 40], 12, 26, 9).unwrap();
    let last = points[39].unwrap();
    assert_relative_eq!(last.macd, 0.0);
    assert_relative_eq!(last.signal, 0.0);
    assert_relative_eq!(last.histogram, 0.0);
}

#[test]
fn test_rsi_and_macd_are_deterministic() {
    let closes = sample_closes(200);

    let rsi_a = rsi(&closes, 14).unwrap();
    let rsi_b = rsi(&closes, 14).unwrap();
    let bits = |v: &[Option<f64>]| v.iter().map(|x| x.map(f64::to_bits)).collect::<Vec<_>>();
    assert_eq!(bits(&rsi_a), bits(&rsi_b));

    let macd_a = macd(&closes, 12, 26, 9).unwrap();
    let macd_b = macd(&closes, 12, 26, 9).unwrap();
    let macd_bits = |v: &[Option<news_stock_eda::stock::indicator::MacdPoint>]| {
        v.iter()
            .map(|p| p.map(|p| (p.macd.to_bits(), p.signal.to_bits(), p.histogram.to_bits())))
            .collect::<Vec<_>>()
    };
    assert_eq!(macd_bits(&macd_a), macd_bits(&macd_b));
}

#[test]
fn test_calculate_all_fills_columns() {
    let mut s = series(&sample_closes(100));
    IndicatorCalculator::default().calculate_all(&mut s).unwrap();

    let last = s.bars.last().unwrap();
    assert!(last.sma.is_some() && last.ema.is_some() && last.rsi.is_some());
    assert!(last.macd.is_some() && last.macd_signal.is_some() && last.macd_hist.is_some());
    assert_eq!(s.bars[18].sma, None);
    assert!(s.bars[19].sma.is_some());
    assert_eq!(s.bars[48].ema, None);
    assert!(s.bars[49].ema.is_some());
}

#[test]
fn test_short_history_yields_missing_values() {
    let mut s = series(&[1.0, 2.0, 3.0]);
    IndicatorCalculator::default().calculate_all(&mut s).unwrap();
    assert!(s
        .bars
        .iter()
        .all(|b| b.sma.is_none() && b.ema.is_none() && b.rsi.is_none() && b.macd.is_none()));
}

#[test]
fn test_zero_window_is_invalid() {
    let config = IndicatorConfig {
        sma_window: 0,
        ..Default::default()
    };
    let mut s = series(&sample_closes(30));
    let err = IndicatorCalculator::new(config).calculate_all(&mut s).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter(_)));

    assert!(matches!(rsi(&[1.0], 0), Err(AnalysisError::InvalidParameter(_))));
}
