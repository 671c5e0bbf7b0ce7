use std::env;
use std::sync::OnceLock;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

// 保存guard到全局，防止被丢弃
static INFO_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static ERROR_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

#[derive(Debug)]
struct LogConfig {
    app_env: String,
    log_level: String,
    log_dir: String,
    log_rotation: String,
    info_file_name: String,
    error_file_name: String,
}

impl LogConfig {
    fn from_env() -> Self {
        Self {
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "local".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "log_files".to_string()),
            log_rotation: env::var("LOG_ROTATION").unwrap_or_else(|_| "daily".to_string()),
            info_file_name: env::var("LOG_INFO_FILE").unwrap_or_else(|_| "info.log".to_string()),
            error_file_name: env::var("LOG_ERROR_FILE")
                .unwrap_or_else(|_| "error.log".to_string()),
        }
    }
}

// 解析时间轮转策略
fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "minutely" | "minute" | "min" => Rotation::MINUTELY,
        "hourly" | "hour" | "hr" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

/// Installs the global subscriber.
///
/// `APP_ENV=local` (the default) logs to stdout only. Any other environment writes
/// rolling `info` and `error` files under `LOG_DIR`.
pub fn setup_logging() -> anyhow::Result<()> {
    let config = LogConfig::from_env();

    // 本地环境：仅控制台输出
    if config.app_env.eq_ignore_ascii_case("local") {
        let subscriber = Registry::default().with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stdout)
                .with_filter(EnvFilter::new(&config.log_level)),
        );
        tracing::subscriber::set_global_default(subscriber)?;
        info!("Log configuration setup successfully! Environment: {}, Log Level: {}", config.app_env, config.log_level);
        return Ok(());
    }

    std::fs::create_dir_all(&config.log_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create log directory '{}': {}", config.log_dir, e))?;

    let info_file = RollingFileAppender::new(
        parse_rotation(&config.log_rotation),
        &config.log_dir,
        &config.info_file_name,
    );
    let error_file = RollingFileAppender::new(
        parse_rotation(&config.log_rotation),
        &config.log_dir,
        &config.error_file_name,
    );

    let (info_non_blocking, info_guard) = tracing_appender::non_blocking(info_file);
    let (error_non_blocking, error_guard) = tracing_appender::non_blocking(error_file);

    INFO_GUARD.set(info_guard).map_err(|_| anyhow::anyhow!("Failed to set INFO_GUARD"))?;
    ERROR_GUARD.set(error_guard).map_err(|_| anyhow::anyhow!("Failed to set ERROR_GUARD"))?;

    let subscriber = Registry::default()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(info_non_blocking)
                .with_filter(EnvFilter::new(&config.log_level)),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(error_non_blocking)
                .with_filter(EnvFilter::new("error")),
        );
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        "Log configuration setup successfully! Environment: {}, Log Level: {}, Log Dir: {}",
        config.app_env, config.log_level, config.log_dir
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("Hourly"), Rotation::HOURLY);
        assert_eq!(parse_rotation("min"), Rotation::MINUTELY);
        assert_eq!(parse_rotation("weekly"), Rotation::DAILY);
    }
}
