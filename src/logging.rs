// File logging; the terminal belongs to ratatui, so nothing goes to stdout

use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

pub const LOG_FILE_NAME: &str = "blogsmith.log";

pub fn log_path(config_dir: &Path) -> PathBuf {
    config_dir.join(LOG_FILE_NAME)
}

/// Start logging into `config_dir`. Logging is skipped if the file cannot be
/// created; the app keeps running either way.
pub fn initialize(config_dir: &Path) {
    let path = log_path(config_dir);
    match File::create(&path) {
        Ok(file) => {
            let _ = WriteLogger::init(LevelFilter::Info, build_config(), file);
        }
        Err(err) => {
            eprintln!("Warning: Could not create log file at {}: {err}", path.display());
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
