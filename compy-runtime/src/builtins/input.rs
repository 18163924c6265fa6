//! Input operations - the `input()` builtin
//!
//! Reads whitespace-delimited tokens, not whole lines: `input()` returns the
//! next word and leaves the rest of the line for the following call.

use std::io::BufRead;

use crate::error::{Result, RuntimeError};
use crate::logging::log_builtin_call;

use super::print::{print, Output};

/// `input(prompt)`: print the prompt, then read one token
pub fn input<O, R>(out: &mut O, src: &mut R, prompt: &str) -> Result<String>
where
    O: Output + ?Sized,
    R: BufRead + ?Sized,
{
    log_builtin_call("input");
    print(out, prompt)?;
    out.flush()?;
    read_token(src)
}

/// Next whitespace-delimited token, or an empty string at end of input
pub fn read_token<R: BufRead + ?Sized>(src: &mut R) -> Result<String> {
    let mut token = Vec::new();

    loop {
        let buf = src.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut finished = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    finished = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }

        src.consume(used);
        if finished {
            break;
        }
    }

    String::from_utf8(token).map_err(|_| RuntimeError::InvalidUtf8)
}
