//! Runtime errors raised by builtins
//!
//! Every failure a compiled program can hit at runtime funnels into
//! [`RuntimeError`]. Builtins return it directly and callers propagate it
//! with `?` up to the program entry point; nothing is retried.

use std::io;
use std::num::ParseIntError;
use thiserror::Error;

pub type Result<T, E = RuntimeError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("range() arg 3 must not be zero (start={start}, stop={stop})")]
    InvalidStep { start: i64, stop: i64 },

    #[error("invalid literal for int(): '{input}'")]
    Parse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("integer overflow in {op}")]
    Overflow { op: &'static str },

    #[error("pow() exponent must be non-negative, got {exponent}")]
    NegativeExponent { exponent: i64 },

    #[error("builtin '{name}' is not defined")]
    UnknownBuiltin { name: String },

    #[error("builtin links form a cycle through '{name}'")]
    LinkCycle { name: String },

    #[error("input is not valid UTF-8")]
    InvalidUtf8,

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RuntimeError {
    /// Short machine-friendly tag, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidStep { .. } => "invalid_step",
            Self::Parse { .. } => "parse",
            Self::Overflow { .. } => "overflow",
            Self::NegativeExponent { .. } => "negative_exponent",
            Self::UnknownBuiltin { .. } => "unknown_builtin",
            Self::LinkCycle { .. } => "link_cycle",
            Self::InvalidUtf8 => "invalid_utf8",
            Self::Io(_) => "io",
        }
    }
}
