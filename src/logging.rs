//! Console logging for the `weatherdash` binary.

use log::{LevelFilter, SetLoggerError};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle;
use thiserror::Error;

const APPENDER: &str = "stderr";
const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l:<5})} {t} - {m}{n}";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid logging configuration")]
    Config(#[from] ConfigErrors),

    #[error("A global logger is already installed")]
    SetLogger(#[from] SetLoggerError),
}

fn console_config(level: LevelFilter) -> Result<Config, ConfigErrors> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build(APPENDER, Box::new(stderr)))
        .build(Root::builder().appender(APPENDER).build(level))
}

/// Installs a stderr appender at `level` as the global logger.
pub fn init_logging(level: LevelFilter) -> Result<Handle, LoggingError> {
    let config = console_config(level)?;
    Ok(log4rs::init_config(config)?)
}
