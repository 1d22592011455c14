//! 日志基础设施

use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::LoggingConfig;

/// 初始化日志系统
///
/// 1. 创建日志目录
/// 2. 设置按日期分割的文件日志
/// 3. 按配置决定是否同时输出到控制台
///
/// `RUST_LOG` 优先于配置中的日志级别。返回的 guard 需要持有到进程结束，
/// 否则缓冲中的日志会丢失。
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_path)?;

    let file_appender = rolling::daily(&config.log_path, &config.file_prefix);
    let (non_blocking, guard) = non_blocking(file_appender);

    let console = config
        .console_output
        .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

    tracing_subscriber::registry()
        .with(env_filter(&config.level))
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false)
                .with_thread_names(true),
        )
        .with(console)
        .try_init()?;

    Ok(guard)
}

/// 仅输出到控制台，客户端命令行使用
pub fn init_console_logging(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(level))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()?;
    Ok(())
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
