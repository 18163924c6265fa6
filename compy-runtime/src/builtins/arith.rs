//! Integer arithmetic builtins
//!
//! Checked `i64` math: an overflow is a runtime error, never a silent wrap.

use num_traits::{CheckedAdd, CheckedMul};

use crate::error::{Result, RuntimeError};
use crate::logging::log_builtin_call;

#[inline]
fn checked<T>(value: Option<T>, op: &'static str) -> Result<T> {
    value.ok_or(RuntimeError::Overflow { op })
}

/// `add(a, b)`
pub fn add(a: i64, b: i64) -> Result<i64> {
    log_builtin_call("add");
    checked(CheckedAdd::checked_add(&a, &b), "add")
}

/// `mul(x, y)`
pub fn mul(x: i64, y: i64) -> Result<i64> {
    log_builtin_call("mul");
    checked(CheckedMul::checked_mul(&x, &y), "mul")
}

/// `pow(value, exponent)` for non-negative exponents
pub fn pow(value: i64, exponent: i64) -> Result<i64> {
    log_builtin_call("pow");
    if exponent < 0 {
        return Err(RuntimeError::NegativeExponent { exponent });
    }

    // Any exponent past usize already overflows unless the base is -1, 0 or 1
    let exp = usize::try_from(exponent).unwrap_or(usize::MAX);
    checked(num_traits::checked_pow(value, exp), "pow")
}
