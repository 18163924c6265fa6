//! `for i in range(n): print(i)`

use std::io::BufRead;

use compy_runtime::{range, Output, Result};

use super::Console;
use crate::frontend::config::ProgramConfig;

pub fn run<O: Output, I: BufRead>(console: &mut Console<O, I>, config: &ProgramConfig) -> Result<()> {
    for i in range(config.count_to) {
        console.print(i)?;
    }
    Ok(())
}
