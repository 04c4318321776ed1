use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// `log` sink that writes to the browser console
pub struct Logger;

static LOGGER: Logger = Logger;

/// Level in force from install until the configuration is loaded
const STARTUP_LEVEL: LevelFilter = LevelFilter::Info;

impl Logger {
    /// Install as the global logger at `Info`, so records emitted while the
    /// configuration loads are kept
    pub fn install() -> anyhow::Result<()> {
        log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("{}", e))?;
        log::set_max_level(STARTUP_LEVEL);
        Ok(())
    }

    /// Keep debug records only when `debug` is set
    pub fn set_debug(debug: bool) {
        log::set_max_level(max_level(debug));
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => {
                console::error!(line);
            }
            Level::Warn => {
                console::warn!(line);
            }
            Level::Info => {
                console::info!(line);
            }
            Level::Debug | Level::Trace => {
                console::debug!(line);
            }
        }
    }

    fn flush(&self) {}
}

fn max_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}
