//! Browser console logging.
//!
//! On `wasm32` the macros write to the devtools console through `web_sys`.
//! Native builds (unit tests, tooling) have no JS host, so the macros only
//! type-check their arguments.

#[cfg(target_arch = "wasm32")]
pub fn log(message: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(target_arch = "wasm32")]
pub fn warn(message: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(message));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log(_message: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn warn(_message: &str) {}

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        if cfg!(target_arch = "wasm32") {
            $crate::logging::log(&format!("[print-cost] {}", format_args!($($arg)*)));
        }
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        if cfg!(target_arch = "wasm32") {
            $crate::logging::warn(&format!("[print-cost] {}", format_args!($($arg)*)));
        }
    };
}
