//! compy - example programs for the ComPy transpiler and the glue that runs them
//!
//! The builtins themselves live in `compy-runtime`; this crate wires them to
//! stdio, configuration and logging.

pub mod error;
pub mod frontend;
pub mod infrastructure;
pub mod programs;

// Re-export commonly used items
pub use compy_runtime as runtime;
pub use error::{Error, Result};
pub use frontend::{cli_main, Config};
pub use infrastructure::{init_logging, LogConfig, LogFormat, LogOutput};
pub use programs::{fib, Console, ProgramKind, StdConsole};
