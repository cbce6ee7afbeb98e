#![deny(missing_docs)]
//! Shared logging utilities for the job board workspace.
//!
//! This crate provides the `board_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line is
//! prefixed with the current page generation so log output can be matched to
//! the page rendering that produced it.

use std::sync::atomic::{AtomicU64, Ordering};

static PAGE_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Records the generation of the page currently shown.
/// The shell bumps this every time a page snapshot is (re)loaded.
pub fn set_page_generation(generation: u64) {
    PAGE_GENERATION.store(generation, Ordering::Relaxed);
}

/// Returns the generation of the page currently shown.
/// Returns 0 before the first page load.
pub fn page_generation() -> u64 {
    PAGE_GENERATION.load(Ordering::Relaxed)
}

/// Logs a trace-level message tagged with the page generation.
#[macro_export]
macro_rules! board_trace {
    ($($arg:tt)*) => {{
        log::trace!("[page {}] {}", $crate::page_generation(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message tagged with the page generation.
#[macro_export]
macro_rules! board_info {
    ($($arg:tt)*) => {{
        log::info!("[page {}] {}", $crate::page_generation(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message tagged with the page generation.
#[macro_export]
macro_rules! board_debug {
    ($($arg:tt)*) => {{
        log::debug!("[page {}] {}", $crate::page_generation(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message tagged with the page generation.
#[macro_export]
macro_rules! board_warn {
    ($($arg:tt)*) => {{
        log::warn!("[page {}] {}", $crate::page_generation(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message tagged with the page generation.
#[macro_export]
macro_rules! board_error {
    ($($arg:tt)*) => {{
        log::error!("[page {}] {}", $crate::page_generation(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
