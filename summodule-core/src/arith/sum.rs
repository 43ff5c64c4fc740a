//! Wrapping 32-bit Addition
//!
//! The arithmetic itself is a single wrapping add. The bulk of this file is
//! the argument marshalling that stands between Python objects and `i32`.
//!
//! # Overflow Policy
//!
//! The C convention for native "int" arithmetic truncates on overflow, which
//! is well-defined on two's-complement hardware but formally undefined in C.
//! Here the policy is explicit: `i32::wrapping_add`, so
//! `sum(i32::MAX, 1) == i32::MIN` on every platform.
//!
//! # Accepted Arguments
//!
//! An argument is valid when it is a Python `int` (including `bool`, which
//! is an `int` subclass) whose value fits in an `i32`. Everything else is
//! rejected with a `TypeError` before any arithmetic happens. Floats are
//! rejected even when their value is integral, matching the `"ii"` format
//! of `PyArg_ParseTuple`.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyInt;

use thiserror::Error;
use tracing::trace;

/// Add two 32-bit signed integers with two's-complement wraparound.
///
/// This is the whole arithmetic core. It is pure and cannot fail.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(sum(2, 3), 5);
/// assert_eq!(sum(i32::MAX, 1), i32::MIN);
/// ```
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Rejection reasons for values that cannot be used as an `i32` argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// The value is not a Python `int` at all.
    #[error("expected an integer, got {type_name}")]
    NotAnInteger {
        /// Python type name of the offending value.
        type_name: String,
    },

    /// The value is an `int` but does not fit in 32 signed bits.
    #[error("integer does not fit in a signed 32-bit value")]
    OutOfRange,
}

impl From<ArgumentError> for PyErr {
    fn from(err: ArgumentError) -> Self {
        // One error kind on the Python side: always a TypeError.
        PyTypeError::new_err(err.to_string())
    }
}

/// Coerce a Python object into an `i32`.
///
/// Accepts `int` and its subclasses; rejects everything else, and rejects
/// integers outside the `i32` range.
pub fn coerce_int(value: &Bound<'_, PyAny>) -> Result<i32, ArgumentError> {
    let int = value
        .downcast::<PyInt>()
        .map_err(|_| ArgumentError::NotAnInteger {
            type_name: type_name_of(value),
        })?;

    int.extract::<i32>().map_err(|_| ArgumentError::OutOfRange)
}

/// Best-effort type name for error messages.
fn type_name_of(value: &Bound<'_, PyAny>) -> String {
    value
        .get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string())
}

// ----------------------------------------------------------------------------
// Python Bindings
// ----------------------------------------------------------------------------

/// Python-exposed `sum(a, b)`.
///
/// Raises `TypeError` when either argument is not an `int` representable
/// as a signed 32-bit value. Overflow of the result wraps.
#[pyfunction]
#[pyo3(name = "sum")]
pub fn py_sum(a: &Bound<'_, PyAny>, b: &Bound<'_, PyAny>) -> PyResult<i32> {
    let a = coerce_int(a)?;
    let b = coerce_int(b)?;
    trace!(a, b, "sum");
    Ok(sum(a, b))
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_small_values() {
        assert_eq!(sum(0, 0), 0);
        assert_eq!(sum(2, 3), 5);
        assert_eq!(sum(-1, 1), 0);
    }

    #[test]
    fn sum_is_commutative() {
        let samples = [0, 1, -1, 7, -42, 1_000_000, i32::MIN, i32::MAX];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(sum(a, b), sum(b, a));
            }
        }
    }

    #[test]
    fn sum_wraps_at_max() {
        assert_eq!(sum(i32::MAX, 1), i32::MIN);
        assert_eq!(sum(i32::MAX, i32::MAX), -2);
    }

    #[test]
    fn sum_wraps_at_min() {
        assert_eq!(sum(i32::MIN, -1), i32::MAX);
        assert_eq!(sum(i32::MIN, i32::MIN), 0);
    }

    #[test]
    fn sum_matches_wrapping_add() {
        let samples = [0, 1, -1, 123_456, i32::MIN / 2, i32::MAX / 2, i32::MIN, i32::MAX];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(sum(a, b), a.wrapping_add(b));
            }
        }
    }

    #[test]
    fn argument_error_messages() {
        let err = ArgumentError::NotAnInteger {
            type_name: "float".to_string(),
        };
        assert_eq!(err.to_string(), "expected an integer, got float");

        assert_eq!(
            ArgumentError::OutOfRange.to_string(),
            "integer does not fit in a signed 32-bit value"
        );
    }
}
