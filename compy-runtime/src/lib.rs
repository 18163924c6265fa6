//! compy runtime - builtins for compiled Python programs
//!
//! This crate provides the runtime support the ComPy transpiler's output
//! calls into: `range`, `print`, `input`, the `int`/`str` casts and the
//! ported arithmetic helpers.

pub mod builtins;
pub mod error;
pub mod logging;

// Re-export core types
pub use builtins::*;
pub use error::{Result, RuntimeError};
