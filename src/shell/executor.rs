//! Запуск внешних команд.

use std::fs::{File, OpenOptions};
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::process::CommandExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::config::ShellConfig;
use super::types::{CommandSpec, ShellError, ShellResult, SpawnOutcome};

/// Права для создаваемого файла перенаправления.
const REDIRECT_MODE: u32 = 0o644;

/// Исполнитель внешних процессов через `std::process::Command`.
pub(crate) struct StdProcessExecutor<'a> {
    config: &'a ShellConfig,
}

impl<'a> StdProcessExecutor<'a> {
    /// Создает исполнитель поверх конфигурации шелла.
    pub(crate) fn new(config: &'a ShellConfig) -> Self {
        Self { config }
    }

    /// Полный путь к программе: префикс + имя, без поиска по `PATH`.
    pub(crate) fn resolve(&self, name: &str) -> PathBuf {
        PathBuf::from(format!("{}{name}", self.config.search_prefix))
    }

    /// Открывает файл перенаправления (запись, создание, обрезка, `0644`).
    ///
    /// Относительный путь берется от рабочего каталога шелла.
    pub(crate) fn open_redirect(&self, target: &str, cwd: &Path) -> ShellResult<File> {
        let path = cwd.join(target);
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(REDIRECT_MODE)
            .open(&path)
            .map_err(|source| ShellError::Redirect { path, source })
    }

    /// Запускает команду, не дожидаясь ее завершения.
    ///
    /// `argv[0]` дочернего процесса совпадает с именем команды, как его ввели.
    pub(crate) fn spawn(
        &self,
        command: &CommandSpec,
        stdout: Option<File>,
        cwd: &Path,
    ) -> SpawnOutcome {
        let program = self.resolve(&command.name);
        trace!(program = %program.display(), args = ?command.args, "spawning");

        let mut cmd = Command::new(&program);
        cmd.arg0(&command.name);
        cmd.args(&command.args);
        cmd.current_dir(cwd);
        cmd.env("PATH", &self.config.search_path);
        if let Some(file) = stdout {
            cmd.stdout(Stdio::from(file));
        }

        match cmd.spawn() {
            Ok(child) => SpawnOutcome::Started(child),
            Err(e) => SpawnOutcome::FailedToStart(e),
        }
    }

    /// Разбирает перенаправление, запускает команду и ждет ее завершения.
    ///
    /// Код возврата дочернего процесса только логируется.
    pub(crate) fn run_external(&self, command: &CommandSpec, cwd: &Path) -> ShellResult<()> {
        let stdout = match &command.redirect {
            Some(target) => Some(self.open_redirect(target, cwd)?),
            None => None,
        };

        match self.spawn(command, stdout, cwd) {
            SpawnOutcome::Started(mut child) => {
                let status = child.wait()?;
                debug!(command = %command.name, %status, "child exited");
                Ok(())
            }
            SpawnOutcome::FailedToStart(source) => Err(ShellError::Spawn {
                program: self.resolve(&command.name),
                source,
            }),
        }
    }
}
