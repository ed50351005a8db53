//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds only.
///
/// Release builds compile the call away entirely, so it is fine to sprinkle
/// this through hot paths such as reducers and command executors. Off-wasm
/// targets (native unit tests) only format the message.
///
/// ```rust,ignore
/// debug_log!("Loaded {} pages", pages.len());
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::log_1(&format!($($arg)*).into());
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = format!($($arg)*);
            }
        }
    }};
}

/// Log an error to the browser console. Always on, also in release builds.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!($($arg)*).into());
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}
