//! Исполнение команд и цикл REPL.

mod builtins;
pub(crate) mod config;
mod executor;
mod parser;
mod types;

#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, trace};

use builtins::Builtin;
use config::ShellConfig;
use executor::StdProcessExecutor;
use parser::{LineCommand, parse_group, parse_line};
use types::{IoStreams, ShellControl, ShellError, ShellResult};

pub(crate) use types::ERROR_MESSAGE;

/// Приглашение интерактивного режима.
const PROMPT: &str = "dash> ";

/// Состояние интерпретатора.
///
/// Рабочий каталог меняет только `cd`, читают его все запускаемые процессы.
struct ShellState {
    cwd: PathBuf,
}

impl ShellState {
    /// Инициализирует состояние рабочим каталогом текущего процесса.
    fn new_from_process_env() -> ShellResult<Self> {
        Ok(Self {
            cwd: std::env::current_dir()?,
        })
    }
}

/// Запускает REPL поверх заданных потоков ввода/вывода.
///
/// Возвращает код завершения процесса.
pub(crate) fn run_repl<R: std::io::Read, W1: Write, W2: Write>(
    input: R,
    mut output: W1,
    mut error: W2,
    config: &ShellConfig,
) -> i32 {
    let mut io = IoStreams {
        stdout: &mut output,
        stderr: &mut error,
    };
    let mut state = match ShellState::new_from_process_env() {
        Ok(state) => state,
        Err(e) => {
            report_error(&mut io, &e);
            return 1;
        }
    };
    let executor = StdProcessExecutor::new(config);

    let mut reader = std::io::BufReader::new(input);
    let mut line = Vec::new();
    loop {
        if config.interactive {
            let _ = write!(io.stdout, "{PROMPT}");
            let _ = io.stdout.flush();
        }

        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => {
                if config.interactive {
                    let eof = std::io::Error::from(std::io::ErrorKind::UnexpectedEof);
                    report_error(&mut io, &ShellError::Io(eof));
                    return 1;
                }
                return 0;
            }
            Ok(_) => {}
            Err(e) => {
                report_error(&mut io, &ShellError::Io(e));
                return 1;
            }
        }

        let bytes = line.strip_suffix(b"\n").unwrap_or(&line[..]);
        // Невалидный UTF-8 не прерывает скрипт: такие байты заменяются на U+FFFD.
        let text = String::from_utf8_lossy(bytes);
        match run_single_line(&executor, &mut state, &text, &mut io) {
            Ok(ShellControl::Continue) => {}
            Ok(ShellControl::Exit(code)) => return code,
            Err(e) => report_error(&mut io, &e),
        }
    }
}

/// Обрабатывает одну строку ввода: exit → builtin → группы по порядку.
///
/// Ошибки отдельных групп печатаются сразу и не мешают следующим группам.
/// Наружу возвращается только ошибка встроенной команды.
fn run_single_line(
    executor: &StdProcessExecutor<'_>,
    state: &mut ShellState,
    line: &str,
    io: &mut IoStreams<'_>,
) -> ShellResult<ShellControl> {
    trace!(line, "processing line");
    match parse_line(line) {
        LineCommand::Exit => Ok(ShellControl::Exit(0)),
        LineCommand::Builtin(builtin, args) => {
            run_builtin(builtin, &args, state)?;
            Ok(ShellControl::Continue)
        }
        LineCommand::Groups(groups) => {
            for group in groups {
                if let Err(e) = run_group(executor, state, group) {
                    report_error(io, &e);
                }
            }
            Ok(ShellControl::Continue)
        }
    }
}

/// Выполняет одну группу. Пустая группа пропускается без запуска процесса.
fn run_group(
    executor: &StdProcessExecutor<'_>,
    state: &ShellState,
    group: &str,
) -> ShellResult<()> {
    let Some(command) = parse_group(group)? else {
        trace!("skipping blank group");
        return Ok(());
    };
    executor.run_external(&command, &state.cwd)
}

fn run_builtin(builtin: Builtin, args: &[String], state: &mut ShellState) -> ShellResult<()> {
    match builtin {
        Builtin::Cd => {
            state.cwd = builtins::run_cd(args, &state.cwd)?;
        }
    }
    Ok(())
}

/// Печатает пользователю фиксированное сообщение, подробности уходят в лог.
fn report_error(io: &mut IoStreams<'_>, error: &ShellError) {
    debug!(%error, "command failed");
    let _ = io.stderr.write_all(ERROR_MESSAGE.as_bytes());
}
