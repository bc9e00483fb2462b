//! Logger initialization for the desktop binary.
//!
//! File output goes to `./vocab.log` in the current working directory.

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./vocab.log";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to `./vocab.log`.
    File,
    /// Write to the terminal.
    Terminal,
    /// Write to both file and terminal.
    Both,
    /// Do not install a logger.
    Off,
}

impl FromStr for LogDestination {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "terminal" | "term" => Ok(Self::Terminal),
            "both" => Ok(Self::Both),
            "off" | "none" => Ok(Self::Off),
            _ => Err(()),
        }
    }
}

/// Install the global logger for `destination` at `level`.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::Off => return,
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
        LogDestination::Terminal => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]
        }
        LogDestination::Both => {
            let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
                level,
                config.clone(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )];
            if let Some(file_logger) = create_file_logger(level, config) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    // Dioxus and the webview crates are chatty at debug level.
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str("services")
        .add_filter_allow_str("ui")
        .add_filter_allow_str("app")
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILE);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {log_path:?}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destinations_parse_case_insensitively() {
        assert_eq!("File".parse::<LogDestination>(), Ok(LogDestination::File));
        assert_eq!("terminal".parse::<LogDestination>(), Ok(LogDestination::Terminal));
        assert_eq!(" BOTH ".parse::<LogDestination>(), Ok(LogDestination::Both));
        assert_eq!("off".parse::<LogDestination>(), Ok(LogDestination::Off));
        assert_eq!("syslog".parse::<LogDestination>(), Err(()));
    }
}
