use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use super::model::{PriceSeries, StockBar};
use crate::error::{AnalysisError, Result};
use crate::time_util;

/// Reads `{data_dir}/{stock_name}_historical_data.csv` files.
#[derive(Debug, Clone)]
pub struct StockLoader {
    data_dir: PathBuf,
}

impl StockLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, stock_name: &str) -> PathBuf {
        self.data_dir.join(format!("{}_historical_data.csv", stock_name))
    }

    pub fn load_stock_data(&self, stock_name: &str) -> Result<PriceSeries> {
        let path = self.path_for(stock_name);
        let bars = read_bars(&path)?;
        info!("loaded {} bars for {} from {}", bars.len(), stock_name, path.display());
        Ok(PriceSeries::new(stock_name, bars))
    }
}

struct PriceColumns {
    date: usize,
    close: usize,
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    volume: Option<usize>,
}

impl PriceColumns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Ok(Self {
            date: find("Date").ok_or_else(|| AnalysisError::MissingField("Date".to_string()))?,
            close: find("Close").ok_or_else(|| AnalysisError::MissingField("Close".to_string()))?,
            open: find("Open"),
            high: find("High"),
            low: find("Low"),
            volume: find("Volume"),
        })
    }
}

fn optional_f64(record: &StringRecord, idx: Option<usize>) -> Option<f64> {
    idx.and_then(|i| record.get(i))
        .and_then(|v| v.trim().parse::<f64>().ok())
}

/// Parses a price CSV; rows come back in file order.
pub fn read_bars(path: &Path) -> Result<Vec<StockBar>> {
    if !path.exists() {
        return Err(AnalysisError::ResourceNotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let columns = PriceColumns::resolve(reader.headers()?)?;

    let mut bars = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let raw_date = record.get(columns.date).unwrap_or("");
        let date = time_util::parse_date(raw_date).ok_or_else(|| {
            AnalysisError::Parse(format!("row {}: invalid Date {:?}", row + 1, raw_date))
        })?;
        let raw_close = record.get(columns.close).unwrap_or("");
        let close = raw_close.trim().parse::<f64>().map_err(|e| {
            AnalysisError::Parse(format!("row {}: invalid Close {:?}: {}", row + 1, raw_close, e))
        })?;

        let mut bar = StockBar::new(date, close);
        bar.open = optional_f64(&record, columns.open);
        bar.high = optional_f64(&record, columns.high);
        bar.low = optional_f64(&record, columns.low);
        bar.volume = optional_f64(&record, columns.volume);
        bars.push(bar);
    }
    debug!("parsed {} rows from {}", bars.len(), path.display());
    Ok(bars)
}
