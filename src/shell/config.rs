//! Настройки интерпретатора, которые вычисляются один раз при старте.

use std::ffi::{OsStr, OsString};

/// Каталог, в котором ищутся все внешние команды.
pub(crate) const DEFAULT_SEARCH_PREFIX: &str = "/bin/";

/// Каталог, который добавляется в начало `PATH`.
const SEARCH_DIR: &str = "/bin";

/// Конфигурация интерпретатора.
///
/// После создания не меняется и передаётся в исполнитель по ссылке.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellConfig {
    /// Префикс, к которому приклеивается имя команды.
    pub(crate) search_prefix: String,
    /// Значение `PATH`, которое получают дочерние процессы.
    pub(crate) search_path: OsString,
    /// Интерактивный режим: печатать приглашение, EOF считается ошибкой.
    pub(crate) interactive: bool,
}

impl ShellConfig {
    /// Строит конфигурацию из окружения текущего процесса.
    pub(crate) fn from_process_env(interactive: bool) -> Self {
        let inherited = std::env::var_os("PATH");
        Self {
            search_prefix: DEFAULT_SEARCH_PREFIX.to_string(),
            search_path: prepend_search_dir(inherited.as_deref()),
            interactive,
        }
    }
}

/// Добавляет `/bin` в начало `PATH`, или возвращает `/bin`, если `PATH` пуст.
///
/// `PATH` может быть не в UTF-8, поэтому склеивается как `OsString`.
pub(crate) fn prepend_search_dir(inherited: Option<&OsStr>) -> OsString {
    let mut search_path = OsString::from(SEARCH_DIR);
    if let Some(path) = inherited.filter(|p| !p.is_empty()) {
        search_path.push(":");
        search_path.push(path);
    }
    search_path
}
