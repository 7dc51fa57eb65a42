//! Настройка логирования через `tracing` + `tracing-subscriber`.
//!
//! Уровень определяется так:
//! 1. флаг `--log-level`
//! 2. переменная окружения `DASH_LOG` ("info", "debug", ...)
//! 3. по умолчанию `warn`
//!
//! Логи пишутся в stderr. Шелл пишет подробности ошибок только на уровне
//! `debug`, поэтому по умолчанию пользователь видит лишь фиксированное сообщение.

use tracing::Level;
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Переменная окружения с уровнем логирования.
const LOG_ENV: &str = "DASH_LOG";

/// Устанавливает глобальный подписчик. Вызывается один раз из `main`.
pub(crate) fn init_logging(cli_level: Option<LogLevel>) {
    let level = cli_level.map(level_from_log_level).unwrap_or_else(|| {
        std::env::var(LOG_ENV)
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(Level::WARN)
    });

    fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_level_str(" Debug "), Some(Level::DEBUG));
        assert_eq!(parse_level_str("warning"), Some(Level::WARN));
        assert_eq!(parse_level_str("loud"), None);
    }

    #[test]
    fn cli_level_maps_to_tracing_level() {
        assert_eq!(level_from_log_level(LogLevel::Trace), Level::TRACE);
        assert_eq!(level_from_log_level(LogLevel::Error), Level::ERROR);
    }
}
