//! Logging utilities for the compy runtime
//!
//! Lightweight structured logging for builtin calls, conversions and runtime
//! failures. Programs that configure their own subscriber never need
//! [`init_runtime_logging`]; it exists for embedders that do not.

use once_cell::sync::OnceCell;

// Re-export tracing macros for use throughout the runtime
pub use tracing::{debug, error, info, trace, warn, Level};

static LOGGER_INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize runtime logging with sensible defaults
///
/// Honors `RUST_LOG` when set. Otherwise logs this crate at DEBUG in debug
/// builds and WARN in release builds, always to stderr.
pub fn init_runtime_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            #[cfg(debug_assertions)]
            {
                EnvFilter::new("compy_runtime=debug")
            }
            #[cfg(not(debug_assertions))]
            {
                EnvFilter::new("compy_runtime=warn")
            }
        });

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .ok(); // Another subscriber may already be installed
    });
}

/// Check if [`init_runtime_logging`] has run
pub fn is_initialized() -> bool {
    LOGGER_INITIALIZED.get().is_some()
}

/// Log a builtin function call
#[inline]
pub fn log_builtin_call(name: &str) {
    trace!(
        target: "builtins",
        name,
        "builtin function called"
    );
}

/// Log a type conversion
#[inline]
pub fn log_type_conversion(from: &str, to: &str) {
    trace!(
        target: "builtins",
        from,
        to,
        "type conversion"
    );
}

/// Log a runtime error
#[inline]
pub fn log_runtime_error(error: &crate::RuntimeError, context: &str) {
    error!(
        target: "runtime",
        kind = error.kind(),
        %error,
        context,
        "runtime error"
    );
}
