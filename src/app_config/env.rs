use std::env;
use std::path::PathBuf;

use tracing::warn;

/// 读取布尔型环境变量：支持 true/false/1/0（大小写不敏感）
pub fn env_is_true(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(v) => {
            let v = v.trim();
            v.eq_ignore_ascii_case("true") || v == "1"
        }
        Err(_) => default,
    }
}

/// 读取字符串环境变量，若不存在则返回默认值
pub fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) => v,
        Err(_) => default.to_string(),
    }
}

/// Reads a non-empty string variable.
pub fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 读取 usize 环境变量，不存在或解析失败返回默认值
pub fn env_usize(key: &str, default: usize) -> usize {
    match env::var(key) {
        Ok(v) => match v.trim().parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                warn!("{} is not a valid number: {:?}, using {}", key, v, default);
                default
            }
        },
        Err(_) => default,
    }
}

/// Settings read by the driver binary.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `{ticker}_historical_data.csv` files.
    pub data_dir: PathBuf,
    pub news_data_path: Option<PathBuf>,
    pub stock_tickers: Vec<String>,
    pub fetch_returns: bool,
    pub market_data_url: String,
    pub chart_width: u16,
    pub chart_height: u16,
    /// Charts go to stdout when unset.
    pub chart_output_dir: Option<PathBuf>,
}

pub const DEFAULT_MARKET_DATA_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

impl AppConfig {
    pub fn from_env() -> Self {
        let stock_tickers = env_or_default("STOCK_TICKERS", "")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            data_dir: PathBuf::from(env_or_default("DATA_DIR", "../data")),
            news_data_path: env_opt("NEWS_DATA_PATH").map(PathBuf::from),
            stock_tickers,
            fetch_returns: env_is_true("FETCH_RETURNS", false),
            market_data_url: env_or_default("MARKET_DATA_URL", DEFAULT_MARKET_DATA_URL),
            chart_width: env_usize("CHART_WIDTH", 120).min(u16::MAX as usize) as u16,
            chart_height: env_usize("CHART_HEIGHT", 30).min(u16::MAX as usize) as u16,
            chart_output_dir: env_opt("CHART_OUTPUT_DIR").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_helpers_fall_back_to_defaults() {
        assert_eq!(env_or_default("NEWS_STOCK_EDA_UNSET_KEY", "x"), "x");
        assert!(env_is_true("NEWS_STOCK_EDA_UNSET_KEY", true));
        assert_eq!(env_usize("NEWS_STOCK_EDA_UNSET_KEY", 7), 7);
        assert_eq!(env_opt("NEWS_STOCK_EDA_UNSET_KEY"), None);
    }
}
