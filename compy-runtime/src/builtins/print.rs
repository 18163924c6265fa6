//! Output operations - the `print()` builtin and its sinks
//!
//! Design: programs never touch stdout directly. They write through an
//! [`Output`] so the same code runs against the terminal or an in-memory
//! buffer in tests.

use std::fmt::Display;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Result;
use crate::logging::log_builtin_call;

/// Output target abstraction
pub trait Output {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }
}

/// Process standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdOutput;

impl Output for StdOutput {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().lock().flush()
    }
}

impl Output for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_bytes(bytes)
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

/// Cloneable in-memory sink; every clone appends to the same buffer
#[derive(Debug, Default, Clone)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Written text split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Output for SharedBuffer {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.lock().extend_from_slice(bytes);
        Ok(())
    }
}

/// `print(value)`: the value followed by a line terminator
pub fn print<O, T>(out: &mut O, value: T) -> Result<()>
where
    O: Output + ?Sized,
    T: Display,
{
    log_builtin_call("print");
    out.write_str(&format!("{value}\n"))?;
    Ok(())
}
