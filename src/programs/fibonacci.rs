//! Basic fibonacci algorithm example

use std::io::BufRead;

use compy_runtime::{add, str_cast, Output, Result, RuntimeError};

use super::Console;
use crate::frontend::config::ProgramConfig;

/// Largest index whose fibonacci number fits in an `i64`
pub const MAX_FIB_INDEX: i64 = 92;

/// Fibonacci number at `index`, computed by plain double recursion
///
/// Indices past [`MAX_FIB_INDEX`] fail up front with `Overflow` rather than
/// recursing for hours towards a result that cannot be represented.
pub fn fib(index: i64) -> Result<i64> {
    if index > MAX_FIB_INDEX {
        return Err(RuntimeError::Overflow { op: "fib" });
    }
    if index <= 1 {
        Ok(index)
    } else {
        add(fib(index - 1)?, fib(index - 2)?)
    }
}

pub fn run<O: Output, I: BufRead>(console: &mut Console<O, I>, config: &ProgramConfig) -> Result<()> {
    let fib_index = config.fib_index;
    console.print(format!(
        "Calculating index {} of fibonacci series...",
        str_cast(fib_index)
    ))?;
    console.print(fib(fib_index)?)
}
