//! Debug logging utilities
//!
//! Provides debug logging that only activates in debug builds.
//! In release builds, all debug_log! calls are no-ops.

use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

static DEBUG_FILE: Mutex<Option<std::fs::File>> = Mutex::new(None);

/// Initialize debug logging (only in debug builds)
#[cfg(debug_assertions)]
pub fn init() {
    let Ok(mut file_guard) = DEBUG_FILE.lock() else {
        return;
    };
    if file_guard.is_none() {
        if let Ok(file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("debug.log")
        {
            *file_guard = Some(file);
            drop(file_guard);
            log("=== Debug session started ===");
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn init() {}

/// Log a message to debug.log (only in debug builds).
///
/// Does nothing until [`init`] has opened the log file.
#[cfg(debug_assertions)]
pub fn log(message: &str) {
    if let Ok(mut file_guard) = DEBUG_FILE.lock() {
        if let Some(ref mut file) = *file_guard {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            let line = format!("[{}] {}\n", timestamp, message);
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
    }
}

#[cfg(not(debug_assertions))]
pub fn log(_message: &str) {}

/// Log a message with a category prefix
#[cfg(debug_assertions)]
pub fn log_category(category: &str, message: &str) {
    log(&format!("[{}] {}", category, message));
}

#[cfg(not(debug_assertions))]
pub fn log_category(_category: &str, _message: &str) {}

/// Log the outcome of a theme application
#[cfg(debug_assertions)]
pub fn log_theme(requested: &str, applied: bool) {
    log_category("THEME", &theme_message(requested, applied));
}

#[cfg(not(debug_assertions))]
pub fn log_theme(_requested: &str, _applied: bool) {}

#[cfg_attr(not(any(debug_assertions, test)), allow(dead_code))]
fn theme_message(requested: &str, applied: bool) -> String {
    if applied {
        format!("applied {}", requested)
    } else {
        format!("ignored unknown theme {:?}", requested)
    }
}

/// Macro for convenient debug logging
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug::log(&format!($($arg)*))
    };
}
