//! Example programs, as the transpiler emits them
//!
//! Every program runs against a [`Console`] so the binaries can bind it to
//! stdio while tests capture the transcript in memory.

mod console;

pub mod arithmetic;
pub mod counter_class;
pub mod counting;
pub mod fibonacci;

pub use console::{Console, StdConsole};
pub use fibonacci::fib;

use std::fmt;
use std::io::BufRead;

use compy_runtime::Output;
use tracing::{debug, info_span};

use crate::error::Result;
use crate::frontend::config::ProgramConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    Fibonacci,
    Arithmetic,
    Counting,
    CounterClass,
}

impl ProgramKind {
    pub const ALL: [ProgramKind; 4] = [
        ProgramKind::Fibonacci,
        ProgramKind::Arithmetic,
        ProgramKind::Counting,
        ProgramKind::CounterClass,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProgramKind::Fibonacci => "fibonacci",
            ProgramKind::Arithmetic => "arithmetic",
            ProgramKind::Counting => "counting",
            ProgramKind::CounterClass => "counter_class",
        }
    }

    /// Run to completion, flushing the console afterwards
    pub fn run<O: Output, I: BufRead>(
        self,
        console: &mut Console<O, I>,
        config: &ProgramConfig,
    ) -> Result<()> {
        let _span = info_span!("program", name = self.name()).entered();
        debug!(target: "programs", ?config, "starting");

        match self {
            ProgramKind::Fibonacci => fibonacci::run(console, config)?,
            ProgramKind::Arithmetic => arithmetic::run(console, config)?,
            ProgramKind::Counting => counting::run(console, config)?,
            ProgramKind::CounterClass => counter_class::run(console, config)?,
        }
        console.flush()?;

        debug!(target: "programs", "finished");
        Ok(())
    }
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
