//! Assignments, ported helpers and user input

use std::io::BufRead;

use compy_runtime::{add, int_cast, mul, str_cast, Output, Result};
use tracing::debug;

use super::Console;
use crate::frontend::config::ProgramConfig;

pub fn run<O: Output, I: BufRead>(console: &mut Console<O, I>, _config: &ProgramConfig) -> Result<()> {
    console.print("Test imported!")?;

    let a = mul(add(1, 2)?, 3)?;
    let b = add(a, 4)?;
    let mut c = b;
    c = add(c, b)?;
    debug!(target: "programs", a, b, c, "assignments evaluated");

    console.print(format!("The answer is... {}", str_cast(c)))?;

    let user_input = console.input("Give me input: ")?;
    console.print(format!("Testing input: {user_input}"))?;

    let scaled = mul(int_cast(&user_input)?, 100)?;
    console.print(format!("More testing input: {}", str_cast(scaled)))?;

    console.print(mul(3, 4)?)?;
    console.print(mul(5, 6)?)
}
