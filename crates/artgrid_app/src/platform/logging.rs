//! Platform logging initialization for the artgrid binary.
//!
//! The grid owns the terminal, so log output goes to a file only.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{CombinedLogger, Config, ConfigBuilder, SharedLogger, WriteLogger};

/// Initialize the file logger at `log_path`.
///
/// When the file cannot be created a warning is printed and logging stays off.
pub fn initialize(log_path: &Path, level: LevelFilter) {
    let Some(file_logger) = create_file_logger(log_path, level, build_config()) else {
        return;
    };
    let loggers: Vec<Box<dyn SharedLogger>> = vec![file_logger];
    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    log_path: &Path,
    level: LevelFilter,
    config: Config,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
