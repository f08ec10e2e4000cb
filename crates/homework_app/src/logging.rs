//! Log sink initialization for the homework bot.
//!
//! Writes to a size-rotated log file and mirrors every line to the terminal.

use std::path::{Path, PathBuf};

use file_rotate::compression::Compression;
use file_rotate::suffix::AppendCount;
use file_rotate::{ContentLimit, FileRotate};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const DEFAULT_LOG_FILE: &str = "homework_bot.log";
/// Size at which the active log file is rotated.
pub const MAX_LOG_BYTES: usize = 50_000_000;
/// Rotated files kept next to the active one (`<file>.1` .. `<file>.5`).
pub const LOG_BACKUPS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: LevelFilter,
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LevelFilter::Debug,
            file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Initialize the global logger with a terminal logger and a rotating file logger.
pub fn initialize(settings: &LogSettings) {
    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = vec![
        TermLogger::new(
            settings.level,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            settings.level,
            config,
            rotating_writer(&settings.file, ContentLimit::Bytes(MAX_LOG_BYTES)),
        ),
    ];

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .set_location_level(LevelFilter::Error)
        .build()
}

// `FileRotate::new` takes an extra file mode argument on unix.
fn rotating_writer(path: &Path, limit: ContentLimit) -> FileRotate<AppendCount> {
    #[cfg(unix)]
    let writer = FileRotate::new(
        path,
        AppendCount::new(LOG_BACKUPS),
        limit,
        Compression::None,
        None,
    );
    #[cfg(not(unix))]
    let writer = FileRotate::new(path, AppendCount::new(LOG_BACKUPS), limit, Compression::None);
    writer
}
