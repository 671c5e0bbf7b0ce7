use approx::assert_relative_eq;
use news_stock_eda::stock::MarketDataClient;
use news_stock_eda::AnalysisError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves one canned HTTP response and returns the base url.
async fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    format!("http://{}/chart", addr)
}

const CHART_BODY: &str = r#"{"chart":{"result":[{"timestamp":[1672704000,1672790400,1672876800,1672963200],
"indicators":{"quote":[{"close":[100.0,110.0,null,99.0]}]}}],"error":null}}"#;

#[tokio::test]
async fn test_fetch_daily_returns() -> anyhow::Result<()> {
    let base = serve_once("200 OK", CHART_BODY).await;
    let returns = MarketDataClient::new(base).fetch_daily_returns("AAPL").await?;

    assert_eq!(returns.ticker, "AAPL");
    assert_eq!(returns.points.len(), 3);
    assert_eq!(returns.points[0].1, None);
    assert_relative_eq!(returns.points[1].1.unwrap(), 0.1, epsilon = 1e-12);
    assert_relative_eq!(returns.points[2].1.unwrap(), -0.1, epsilon = 1e-12);
    Ok(())
}

#[tokio::test]
async fn test_provider_error_status() {
    let base = serve_once(
        "404 Not Found",
        r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#,
    )
    .await;
    let err = MarketDataClient::new(base).fetch_daily_closes("ZZZZ").await.unwrap_err();
    assert!(matches!(err, AnalysisError::ExternalDependency(msg) if msg.contains("delisted")));
}

#[tokio::test]
async fn test_unreachable_provider() {
    let err = MarketDataClient::new("http://127.0.0.1:1/chart")
        .fetch_daily_closes("AAPL")
        .await
        .unwrap_err();
    assert!(matches!(err, AnalysisError::ExternalDependency(_)));
}
