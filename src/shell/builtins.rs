//! Реализация встроенных команд.

use std::path::{Path, PathBuf};

use nix::unistd::{AccessFlags, access};
use tracing::debug;

use super::types::{ShellError, ShellResult};

/// Встроенные команды. Пока только смена каталога.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Cd,
}

impl Builtin {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "cd" => Some(Builtin::Cd),
            _ => None,
        }
    }
}

/// Выполняет `cd` и возвращает новый рабочий каталог шелла.
///
/// Нужен ровно один аргумент. Относительный путь берется от `cwd`.
pub(crate) fn run_cd(args: &[String], cwd: &Path) -> ShellResult<PathBuf> {
    let [target] = args else {
        return Err(ShellError::ChangeDirUsage(args.len()));
    };

    let path = cwd.join(target);
    let resolved = path
        .canonicalize()
        .map_err(|source| ShellError::ChangeDir {
            path: path.clone(),
            source,
        })?;
    if !resolved.is_dir() {
        return Err(ShellError::NotADirectory(path));
    }
    // Войти в каталог можно только с правом поиска (x).
    access(resolved.as_path(), AccessFlags::X_OK).map_err(|errno| {
        ShellError::ChangeDir {
            path: path.clone(),
            source: errno.into(),
        }
    })?;

    debug!(dir = %resolved.display(), "working directory changed");
    Ok(resolved)
}
