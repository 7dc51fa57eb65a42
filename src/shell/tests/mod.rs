//! Тесты модуля `shell`.
//!
//! Здесь лежат unit-тесты отдельных компонентов и тесты REPL.

mod parser;

use super::config::ShellConfig;

/// Конфигурация как при запуске из файла, с поиском команд в `/bin/`.
pub(super) fn batch_config() -> ShellConfig {
    ShellConfig {
        search_prefix: "/bin/".to_string(),
        search_path: "/bin".into(),
        interactive: false,
    }
}
