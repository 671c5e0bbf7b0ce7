//! Daily closes from a Yahoo-style chart endpoint.

use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use super::model::ReturnSeries;
use crate::app_config::env::DEFAULT_MARKET_DATA_URL;
use crate::error::{AnalysisError, Result};
use crate::time_util;

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Parses a chart payload into `(day, close)` pairs, skipping null closes.
pub fn parse_chart_closes(body: &str) -> Result<Vec<(NaiveDate, f64)>> {
    let response: ChartResponse = serde_json::from_str(body)
        .map_err(|e| AnalysisError::ExternalDependency(format!("malformed chart response: {}", e)))?;

    if let Some(err) = response.chart.error {
        return Err(AnalysisError::ExternalDependency(format!(
            "provider error [{}]: {}",
            err.code, err.description
        )));
    }
    let data = response
        .chart
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| AnalysisError::ExternalDependency("no chart data returned".to_string()))?;
    let quote = data
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AnalysisError::ExternalDependency("no quote data returned".to_string()))?;

    Ok(data
        .timestamp
        .iter()
        .zip(quote.close)
        .filter_map(|(&ts, close)| Some((time_util::unix_seconds_to_date(ts)?, close?)))
        .collect())
}

#[derive(Debug, Clone)]
pub struct MarketDataClient {
    client: Client,
    base_url: String,
}

impl Default for MarketDataClient {
    fn default() -> Self {
        Self::new(DEFAULT_MARKET_DATA_URL)
    }
}

impl MarketDataClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, symbol: &str) -> String {
        format!("{}/{}?range=max&interval=1d", self.base_url, symbol)
    }

    /// Full daily close history of `symbol`.
    pub async fn fetch_daily_closes(&self, symbol: &str) -> Result<Vec<(NaiveDate, f64)>> {
        let url = self.url_for(symbol);
        debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "Mozilla/5.0")
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            // 服务端错误也可能带有 chart.error 描述
            let provider_error = serde_json::from_str::<ChartResponse>(&body)
                .ok()
                .and_then(|r| r.chart.error);
            return Err(AnalysisError::ExternalDependency(match provider_error {
                Some(err) => format!("provider error [{}]: {} (status {})", err.code, err.description, status),
                None => format!("request for {} failed with status {}", symbol, status),
            }));
        }

        let closes = parse_chart_closes(&body)?;
        info!("fetched {} daily closes for {}", closes.len(), symbol);
        Ok(closes)
    }

    /// Daily percentage returns over the full history.
    pub async fn fetch_daily_returns(&self, symbol: &str) -> Result<ReturnSeries> {
        let closes = self.fetch_daily_closes(symbol).await?;
        Ok(ReturnSeries::from_closes(symbol, &closes))
    }
}
