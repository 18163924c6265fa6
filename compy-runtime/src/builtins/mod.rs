//! Built-in functions - the Python builtins compiled programs call
//!
//! Each builtin lives in a focused module; this module re-exports the safe
//! Rust API.

mod arith;
mod cast;
mod input;
mod iter;
mod print;
pub mod registry;

#[cfg(test)]
mod tests;

pub use arith::{add, mul, pow};
pub use cast::{int_cast, str_cast};
pub use input::{input, read_token};
pub use iter::{range, range_step, RangeIter, RangeSequence};
pub use print::{print, Output, SharedBuffer, StdOutput};
pub use registry::{Builtin, BuiltinRegistry};
