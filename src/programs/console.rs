use std::fmt::Display;
use std::io::{self, BufRead, StdinLock};

use compy_runtime::{input, print, Output, Result, StdOutput};

/// The text I/O a program talks to: a sink for `print` and a token source for `input`
#[derive(Debug)]
pub struct Console<O, I> {
    out: O,
    input: I,
}

pub type StdConsole = Console<StdOutput, StdinLock<'static>>;

impl StdConsole {
    /// Console bound to the process's stdout and stdin
    pub fn stdio() -> Self {
        Console::new(StdOutput, io::stdin().lock())
    }
}

impl<O: Output, I: BufRead> Console<O, I> {
    pub fn new(out: O, input: I) -> Self {
        Self { out, input }
    }

    #[inline]
    pub fn print(&mut self, value: impl Display) -> Result<()> {
        print(&mut self.out, value)
    }

    #[inline]
    pub fn input(&mut self, prompt: &str) -> Result<String> {
        input(&mut self.out, &mut self.input, prompt)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
