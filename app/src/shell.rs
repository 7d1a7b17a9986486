use std::{
    fmt,
    io::Write,
    sync::{Mutex, OnceLock},
};

use anstyle::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

const ERROR: Style = AnsiColor::Red.on_default().bold();
const WARN: Style = AnsiColor::Yellow.on_default().bold();
const STATUS: Style = AnsiColor::Green.on_default().bold();
const DEBUG: Style = AnsiColor::Cyan.on_default().bold();

static SHELL: OnceLock<Shell> = OnceLock::new();

pub fn shell() -> &'static Shell {
    SHELL.get_or_init(Shell::new)
}

pub struct Shell {
    stderr: Mutex<anstream::Stderr>,
}

impl Shell {
    fn new() -> Self {
        Self {
            stderr: Mutex::new(anstream::stderr()),
        }
    }

    pub fn print(
        &self,
        style: Style,
        status: impl fmt::Display,
        message: impl fmt::Display,
        justified: bool,
    ) {
        let log = create_log(style, status, message, justified);
        let mut stderr = self.stderr.lock().unwrap_or_else(|err| err.into_inner());
        // Nowhere left to report a failed write to stderr.
        let _ = writeln!(stderr, "{log}");
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.print(ERROR, "error", message, false);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.print(WARN, "warning", message, false);
    }

    pub fn status(&self, status: impl fmt::Display, message: impl fmt::Display) {
        self.print(STATUS, status, message, true);
    }
}

fn create_log(
    style: Style,
    status: impl fmt::Display,
    message: impl fmt::Display,
    justified: bool,
) -> String {
    if justified {
        format!("{style}{status:>12}{style:#} {message}")
    } else {
        let bold = if style.get_effects().contains(Effects::BOLD) {
            Style::new().bold()
        } else {
            Style::new()
        };
        format!("{style}{status}{style:#}{bold}:{bold:#} {message}")
    }
}

/// Routes `log` records to the shell.
struct ShellLogger;

static LOGGER: ShellLogger = ShellLogger;

impl Log for ShellLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Error => shell().error(record.args()),
            Level::Warn => shell().warn(record.args()),
            Level::Info => shell().status(record.target(), record.args()),
            Level::Debug | Level::Trace => {
                shell().print(DEBUG, record.level().as_str().to_lowercase(), record.args(), true)
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use anstyle::Style;

    use super::create_log;

    #[test]
    fn plain_log_line() {
        assert_eq!(create_log(Style::new(), "warning", "careful", false), "warning: careful");
    }

    #[test]
    fn justified_status() {
        assert_eq!(
            create_log(Style::new(), "Rendered", "dist/index.html", true),
            "    Rendered dist/index.html"
        );
    }
}
