//! Conversions between text and numbers - `int()` and `str()`

use std::fmt::Display;

use num_traits::Num;

use crate::error::{Result, RuntimeError};
use crate::logging::log_type_conversion;

/// `int(text)`: optionally signed decimal literal, surrounding whitespace ignored
pub fn int_cast(text: &str) -> Result<i64> {
    log_type_conversion("str", "int");
    text.trim()
        .parse::<i64>()
        .map_err(|source| RuntimeError::Parse {
            input: text.to_string(),
            source,
        })
}

/// `str(number)`
pub fn str_cast<N: Num + Display>(value: N) -> String {
    log_type_conversion("number", "str");
    value.to_string()
}
