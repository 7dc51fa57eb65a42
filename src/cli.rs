//! Разбор аргументов командной строки через `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Аргументы командной строки `dash`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dash",
    version,
    about = "Minimal command interpreter: `cmd args > file & cmd ...`.",
    long_about = None
)]
pub(crate) struct CliArgs {
    /// Файл с командами. Без него команды читаются из stdin с приглашением.
    #[arg(value_name = "BATCH")]
    pub(crate) batch: Option<PathBuf>,

    /// Уровень логирования (error, warn, info, debug, trace).
    ///
    /// Если не задан, используется `DASH_LOG` или `warn`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub(crate) log_level: Option<LogLevel>,
}

/// Уровень логирования в CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Разбирает аргументы; `--help` и `--version` остаются ошибками clap.
pub(crate) fn try_parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
