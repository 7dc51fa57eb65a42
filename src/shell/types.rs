//! Общие типы для исполнения команд.

use std::path::PathBuf;
use std::process::Child;

use super::parser::ParseError;

/// Единственное сообщение об ошибке, которое видит пользователь.
pub(crate) const ERROR_MESSAGE: &str = "An error has occurred\n";

/// Спецификация команды после разбора группы.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CommandSpec {
    /// Имя команды (первый токен группы, может быть пустым при `> file`).
    pub(crate) name: String,
    /// Аргументы команды (без имени).
    pub(crate) args: Vec<String>,
    /// Файл, в который перенаправляется stdout.
    pub(crate) redirect: Option<String>,
}

/// Результат попытки запустить дочерний процесс.
#[derive(Debug)]
pub(crate) enum SpawnOutcome {
    /// Процесс запущен, родитель владеет его дескриптором.
    Started(Child),
    /// Процесс не удалось запустить (нет файла, нет прав и т.п.).
    FailedToStart(std::io::Error),
}

/// Потоки вывода интерпретатора.
pub(crate) struct IoStreams<'a> {
    /// Поток stdout интерпретатора.
    pub(crate) stdout: &'a mut dyn std::io::Write,
    /// Поток stderr интерпретатора.
    pub(crate) stderr: &'a mut dyn std::io::Write,
}

/// Управляющий результат исполнения строки.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShellControl {
    /// Продолжить работу REPL.
    Continue,
    /// Завершить REPL с кодом.
    Exit(i32),
}

/// Ошибки интерпретатора.
///
/// Текст ошибки попадает только в лог; пользователю печатается [`ERROR_MESSAGE`].
#[derive(Debug, thiserror::Error)]
pub(crate) enum ShellError {
    /// Ошибка разбора группы.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// Файл перенаправления не удалось открыть.
    #[error("cannot open {path}: {source}")]
    Redirect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// `cd` вызван не с одним аргументом.
    #[error("cd: expected exactly one argument, got {0}")]
    ChangeDirUsage(usize),
    /// Каталог не существует или недоступен.
    #[error("cd: {path}: {source}")]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Путь существует, но это не каталог.
    #[error("cd: {0}: not a directory")]
    NotADirectory(PathBuf),
    /// Внешнюю программу не удалось запустить.
    #[error("cannot execute {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Ошибка ввода/вывода самого интерпретатора.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Удобный alias для результатов функций шелла.
pub(crate) type ShellResult<T> = Result<T, ShellError>;
