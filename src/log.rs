// src/log.rs
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::time::Uptime;

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<bool> = OnceLock::new();

/// Install the file logger (`.store/debug.log`). Safe to call more than once;
/// returns false when the log file could not be opened.
pub fn init() -> bool {
    *INIT.get_or_init(|| init_at(Path::new(STORE_DIR), LOG_FILE))
}

fn init_at(dir: &Path, file: &str) -> bool {
    if fs::create_dir_all(dir).is_err() {
        return false;
    }
    let Ok(appender) = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file)
        .build(dir)
    else {
        return false;
    };
    tracing_subscriber::fmt()
        .with_writer(appender)
        .with_ansi(false)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .try_init()
        .is_ok()
}

/// Internal logging function
pub fn write_log(level: Level, msg: &str) {
    match level {
        Level::ERROR => tracing::error!("{msg}"),
        Level::WARN => tracing::warn!("{msg}"),
        Level::INFO => tracing::info!("{msg}"),
        Level::DEBUG => tracing::debug!("{msg}"),
        _ => tracing::trace!("{msg}"),
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::INFO, &format!($($arg)*))
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::DEBUG, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::write_log($crate::log::Level::ERROR, &format!($($arg)*))
    };
}
