//! Console logger for the `log` facade.
//!
//! On wasm32 every record is forwarded to the browser console at the matching
//! severity. Native builds (tests, tools) install their own logger instead.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        emit(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::info_1(&msg),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, _line: &str) {}

/// Install the console logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(level: LevelFilter) {
    // A second set_logger fails harmlessly.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
