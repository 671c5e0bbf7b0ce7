//! Exploratory analysis of financial-news metadata and historical stock prices.
//!
//! The two toolkits are independent: [`financial_news`] profiles publishers,
//! headlines and publication times, [`stock`] loads price history, appends
//! technical indicators and renders text charts.

pub mod app_config;
pub mod error;
pub mod financial_news;
pub mod stock;
pub mod time_util;

pub use error::{AnalysisError, Result};
