//! Logger module for precompile-embed
//!
//! Go-style simple logging: `[LEVEL] message`
//!
//! # Usage
//!
//! ```rust
//! use precompile_embed::util::logger::{self, LogLevel};
//!
//! logger::init_with_level(LogLevel::Info);
//! tracing::info!("Hello, {}", "world");
//! ```

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Environment variable selecting the log level
pub const LOG_ENV: &str = "PRECOMPILE_EMBED_LOG";

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse `debug`, `info`, `warn`/`warning` or `error`, ignoring case
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// Pick the level from CLI flags, then `PRECOMPILE_EMBED_LOG`, then INFO
pub fn select_level(
    verbose: bool,
    quiet: bool,
    env_value: Option<&str>,
) -> LogLevel {
    if verbose {
        return LogLevel::Debug;
    }
    if quiet {
        return LogLevel::Warn;
    }
    env_value
        .and_then(LogLevel::parse)
        .unwrap_or(LogLevel::Info)
}

/// Initialize logger with custom level (Go style: `[LEVEL] message`)
pub fn init_with_level(level: LogLevel) {
    let filter = tracing_subscriber::filter::LevelFilter::from_level(level.into());

    // Go 风格：显示 [LEVEL] 前缀，不显示时间、不显示模块路径、无颜色
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(false)
        .compact()
        .with_filter(filter);

    Registry::default().with(layer).init();
}

/// Initialize logger for CLI use
pub fn init_cli(
    verbose: bool,
    quiet: bool,
) {
    let env_value = std::env::var(LOG_ENV).ok();
    init_with_level(select_level(verbose, quiet, env_value.as_deref()));
}
