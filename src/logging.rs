//! Logging for the sokol libraries.
//!
//! Every native module takes a `Logger { func, user_data }` in its setup
//! descriptor. [`forward`] is a callback with the native `slog_func`
//! signature that routes those messages into the `log` facade, so they end up
//! wherever the host application sends its own logs.
//!
//! [`init`] installs a default `log` backend for the targets that need one:
//! unified logging on iOS and the browser console on the web.

use std::ffi::{c_char, c_void};
use std::ptr;

use log::Level;

use crate::text::{self, CStrArg};

/// Native logger callback: tag, level, item, message, line, file, user data.
pub type LogFn =
    unsafe extern "C" fn(*const c_char, u32, u32, *const c_char, u32, *const c_char, *mut c_void);

// Logger subsystem identifier
#[cfg(feature = "ios")]
const LOG_SUBSYSTEM: &str = "com.sokol.native";

/// Native log levels.
pub const LEVEL_PANIC: u32 = 0;
pub const LEVEL_ERROR: u32 = 1;
pub const LEVEL_WARN: u32 = 2;
pub const LEVEL_INFO: u32 = 3;

// ═══════════════════════════════════════════════════════════════════════════
// Logger Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Install the default logger for this target.
///
/// Call once at startup. Does nothing on desktop targets, where the host
/// picks its own `log` implementation. Safe to call more than once.
#[cfg(feature = "ios")]
pub fn init() {
    oslog::OsLogger::new(LOG_SUBSYSTEM)
        .level_filter(log::LevelFilter::Debug)
        .init()
        .ok();
}

/// Install the default logger for this target.
///
/// Sets up panic hooks and console logging.
#[cfg(all(feature = "web", not(feature = "ios")))]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Debug).ok();
}

/// Install the default logger for this target.
#[cfg(not(any(feature = "ios", feature = "web")))]
pub fn init() {}

// ═══════════════════════════════════════════════════════════════════════════
// Native Callback
// ═══════════════════════════════════════════════════════════════════════════

/// Map a native log level onto the `log` crate.
///
/// Native panics are logged as errors; the native side aborts right after.
pub fn level(native: u32) -> Level {
    match native {
        LEVEL_PANIC | LEVEL_ERROR => Level::Error,
        LEVEL_WARN => Level::Warn,
        LEVEL_INFO => Level::Info,
        _ => Level::Debug,
    }
}

/// `slog_func`-compatible callback that forwards to the `log` facade.
///
/// The log target is `sokol::<tag>`, e.g. `sokol::sg` for sokol_gfx.
///
/// # Safety
///
/// String arguments must be null or NUL-terminated, as the native side
/// guarantees.
pub unsafe extern "C" fn forward(
    tag: *const c_char,
    log_level: u32,
    log_item: u32,
    message: *const c_char,
    line_nr: u32,
    filename: *const c_char,
    _user_data: *mut c_void,
) {
    let level = level(log_level);
    let tag = unsafe { text::to_string(tag) };
    let target = if tag.is_empty() {
        String::from("sokol")
    } else {
        format!("sokol::{tag}")
    };
    if !log::log_enabled!(target: &target, level) {
        return;
    }

    let message = unsafe { text::to_string(message) };
    let filename = unsafe { text::to_string(filename) };
    let panic = if log_level == LEVEL_PANIC { "PANIC " } else { "" };
    if filename.is_empty() {
        log::log!(target: &target, level, "{panic}[item {log_item}] {message}");
    } else {
        log::log!(
            target: &target,
            level,
            "{panic}[item {log_item}] {message} ({filename}:{line_nr})"
        );
    }
}

/// Give a module's `Logger` a constructor that installs [`forward`].
macro_rules! impl_bridged_logger {
    ($ty:ty) => {
        impl $ty {
            /// A logger that forwards native messages to the `log` crate.
            pub fn bridged() -> Self {
                Self {
                    func: Some($crate::logging::forward),
                    user_data: ::std::ptr::null_mut(),
                }
            }
        }
    };
}

pub(crate) use impl_bridged_logger;

// ═══════════════════════════════════════════════════════════════════════════
// CALLS
// ═══════════════════════════════════════════════════════════════════════════

/// The native default logger, which prints to stderr (or the platform log).
///
/// Install it with `Logger { func: Some(logging::func), .. }` to bypass the
/// `log` bridge.
pub use self::ffi::slog_func as func;

/// Log through the native default logger.
pub fn log_native(
    tag: &str,
    log_level: u32,
    log_item: u32,
    message: &str,
    line_nr: u32,
    filename: &str,
) {
    let tag = CStrArg::new(tag);
    let message = CStrArg::new(message);
    let filename = CStrArg::new(filename);
    unsafe {
        ffi::slog_func(
            tag.as_ptr(),
            log_level,
            log_item,
            message.as_ptr(),
            line_nr,
            filename.as_ptr(),
            ptr::null_mut(),
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// NATIVE ENTRY POINTS
// ═══════════════════════════════════════════════════════════════════════════

pub mod ffi {
    use std::ffi::{c_char, c_void};

    #[cfg_attr(all(feature = "link", target_os = "ios"), link(name = "sokol", kind = "framework"))]
    #[cfg_attr(all(feature = "link", not(target_os = "ios")), link(name = "sokol"))]
    unsafe extern "C" {
        pub fn slog_func(
            tag: *const c_char,
            log_level: u32,
            log_item: u32,
            message: *const c_char,
            line_nr: u32,
            filename: *const c_char,
            user_data: *mut c_void,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx;

    #[test]
    fn native_levels_map_onto_log_levels() {
        assert_eq!(level(LEVEL_PANIC), Level::Error);
        assert_eq!(level(LEVEL_ERROR), Level::Error);
        assert_eq!(level(LEVEL_WARN), Level::Warn);
        assert_eq!(level(LEVEL_INFO), Level::Info);
        assert_eq!(level(42), Level::Debug);
    }

    #[test]
    fn bridged_logger_installs_forward() {
        let logger = gfx::Logger::bridged();
        assert!(logger.func.is_some());
        assert!(logger.user_data.is_null());
    }

    #[test]
    fn forward_tolerates_null_strings() {
        let func = gfx::Logger::bridged().func.unwrap();
        unsafe {
            func(
                ptr::null(),
                LEVEL_WARN,
                7,
                ptr::null(),
                0,
                ptr::null(),
                ptr::null_mut(),
            )
        };
    }

    #[test]
    fn forward_reads_native_strings() {
        let tag = CStrArg::new("sg");
        let message = CStrArg::new("buffer pool exhausted");
        let file = CStrArg::new("sokol_gfx.h");
        unsafe {
            forward(
                tag.as_ptr(),
                LEVEL_ERROR,
                12,
                message.as_ptr(),
                4711,
                file.as_ptr(),
                ptr::null_mut(),
            )
        };
    }
}
