mod cli;
mod logging;
mod shell;

use std::fs::File;
use std::io::Write;

use clap::error::ErrorKind;

use shell::config::ShellConfig;

fn main() {
    std::process::exit(run_main());
}

fn run_main() -> i32 {
    let args = match cli::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => return usage_error(),
    };
    logging::init_logging(args.log_level);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match args.batch {
        Some(path) => {
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "cannot open batch file");
                    return usage_error();
                }
            };
            let config = ShellConfig::from_process_env(false);
            shell::run_repl(file, stdout.lock(), stderr.lock(), &config)
        }
        None => {
            let config = ShellConfig::from_process_env(true);
            shell::run_repl(std::io::stdin().lock(), stdout.lock(), stderr.lock(), &config)
        }
    }
}

fn usage_error() -> i32 {
    let _ = std::io::stderr().write_all(shell::ERROR_MESSAGE.as_bytes());
    1
}
