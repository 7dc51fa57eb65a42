//! Разбор командной строки (без кавычек, подстановок и пайпов).
//!
//! Поддерживает:
//! - разделение строки на группы по `&` (пустые группы сохраняются)
//! - разделение группы на аргументы по пробелам и табам
//! - перенаправление stdout: `cmd args > file`
//! - `exit` и встроенные команды, которые распознаются по всей строке до разбиения на группы

use super::builtins::Builtin;
use super::types::CommandSpec;

/// Разделитель групп команд.
pub(crate) const GROUP_SEPARATOR: char = '&';

/// Маркер перенаправления stdout.
pub(crate) const REDIRECT_MARKER: &str = ">";

/// Что делать с одной строкой ввода.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineCommand<'a> {
    /// Строка ровно `exit`.
    Exit,
    /// Строка начинается со встроенной команды; внутри все остальные токены строки.
    Builtin(Builtin, Vec<String>),
    /// Последовательность групп, которые исполняются по порядку.
    Groups(Vec<&'a str>),
}

/// Ошибка разбора группы.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    /// После `>` нет имени файла.
    #[error("missing redirection target after `>`")]
    MissingRedirectTarget,
}

/// Классифицирует строку.
///
/// Проверка `exit` точная (без обрезки пробелов), `cd` ищется по первому токену
/// всей строки, поэтому `cd` работает только как первая команда строки.
pub(crate) fn parse_line(line: &str) -> LineCommand<'_> {
    if line == "exit" {
        return LineCommand::Exit;
    }

    let mut words = tokenize(line);
    if let Some(builtin) = words.first().and_then(|w| Builtin::from_name(w)) {
        words.remove(0);
        return LineCommand::Builtin(builtin, words);
    }

    LineCommand::Groups(split_groups(line, GROUP_SEPARATOR))
}

/// Делит строку на группы по `separator`.
///
/// Разделитель выбрасывается, пустые группы между соседними разделителями
/// остаются на своих местах.
pub(crate) fn split_groups(line: &str, separator: char) -> Vec<&str> {
    line.split(separator).collect()
}

/// Превращает группу в список аргументов.
///
/// Разделители: пробел и таб, последовательности схлопываются.
/// Пустая или пробельная группа даёт пустой вектор.
pub(crate) fn tokenize(group: &str) -> Vec<String> {
    group
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Разбирает одну группу в команду.
///
/// Возвращает `Ok(None)` для группы из одних пробелов и табов: такую группу
/// не запускают и не ждут.
/// Первый токен `>` забирает следующий токен как путь и обрезает команду
/// на маркере; всё, что стоит после пути, тоже отбрасывается.
pub(crate) fn parse_group(group: &str) -> Result<Option<CommandSpec>, ParseError> {
    let mut tokens = tokenize(group);
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut redirect = None;
    if let Some(pos) = tokens.iter().position(|t| t == REDIRECT_MARKER) {
        let target = tokens
            .get(pos + 1)
            .cloned()
            .ok_or(ParseError::MissingRedirectTarget)?;
        redirect = Some(target);
        tokens.truncate(pos);
    }

    let mut tokens = tokens.into_iter();
    let name = tokens.next().unwrap_or_default();
    Ok(Some(CommandSpec {
        name,
        args: tokens.collect(),
        redirect,
    }))
}

fn is_separator(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}
