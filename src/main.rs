use std::fs;
use std::path::Path;

use dotenv::dotenv;
use tracing::{error, info, warn};

use news_stock_eda::app_config::log::setup_logging;
use news_stock_eda::app_config::AppConfig;
use news_stock_eda::financial_news::report::{DomainSummary, TopTable};
use news_stock_eda::financial_news::{load_news, NewsAnalysis};
use news_stock_eda::stock::{ChartRenderer, IndicatorCalculator, MarketDataClient, StockLoader};

const TOP_N: usize = 10;

fn run_news_analysis(path: &Path) -> anyhow::Result<()> {
    let records = load_news(path)?;
    let analysis = NewsAnalysis::default();

    let publishers = analysis.analyze_publisher_frequency(&records);
    print!("{}", TopTable { title: "Publishers", table: &publishers, top_n: TOP_N });

    let emails = analysis.extract_email_publishers(&records);
    print!("{}", emails);
    let domains = analysis.extract_email_domains(&emails);
    print!("{}", DomainSummary(&domains));
    let org_domains = analysis.get_organizational_domains(&domains);
    print!("{}", TopTable { title: "Organizational Email Domains", table: &org_domains, top_n: TOP_N });

    match analysis.analyze_keyword_frequency(&records) {
        Ok(keywords) => print!("{}", keywords),
        Err(e) => warn!("keyword frequency skipped: {}", e),
    }
    print!("{}", analysis.analyze_headline_patterns(&records));
    print!("{}", analysis.analyze_daily_patterns(&records));
    print!("{}", analysis.analyze_hourly_patterns(&records));
    print!("{}", analysis.analyze_weekly_patterns(&records));
    Ok(())
}

fn emit_chart(config: &AppConfig, name: &str, chart: String) -> anyhow::Result<()> {
    match &config.chart_output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(format!("{}.txt", name));
            fs::write(&path, chart)?;
            info!("chart written to {}", path.display());
        }
        None => println!("{}", chart),
    }
    Ok(())
}

async fn run_stock_analysis(config: &AppConfig, ticker: &str) -> anyhow::Result<()> {
    let loader = StockLoader::new(&config.data_dir);
    let calculator = IndicatorCalculator::default();
    let renderer = ChartRenderer::new(config.chart_width, config.chart_height);

    let mut series = loader.load_stock_data(ticker)?;
    calculator.calculate_all(&mut series)?;
    print!("{}", series);

    emit_chart(config, &format!("{}_price", ticker), renderer.plot_stock_price(&series))?;
    emit_chart(config, &format!("{}_rsi", ticker), renderer.plot_rsi(&series))?;
    emit_chart(config, &format!("{}_macd", ticker), renderer.plot_macd(&series))?;

    if config.fetch_returns {
        let client = MarketDataClient::new(&config.market_data_url);
        let returns = client.fetch_daily_returns(ticker).await?;
        emit_chart(config, &format!("{}_returns", ticker), renderer.plot_stock_returns(&returns))?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    // 设置日志
    setup_logging()?;

    let config = AppConfig::from_env();
    info!("config: {:?}", config);

    if let Some(path) = &config.news_data_path {
        if let Err(e) = run_news_analysis(path) {
            error!("news analysis failed: {}", e);
        }
    }

    // 每个股票独立分析，失败不影响其他股票
    for ticker in &config.stock_tickers {
        if let Err(e) = run_stock_analysis(&config, ticker).await {
            error!("stock analysis for {} failed: {}", ticker, e);
        }
    }
    Ok(())
}
