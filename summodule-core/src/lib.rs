//! Summodule Core
//!
//! This crate is the native half of the `summodule` Python package. It
//! exposes exactly one function to the host interpreter:
//!
//! - `sum(a, b)`: wrapping addition of two 32-bit signed integers.
//!
//! The crate is designed to be used both as a native Rust library and as a
//! Python extension module via PyO3: the arithmetic and its error type are
//! plain Rust, the bindings are a thin marshalling layer on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use summodule_core::arith::sum;
//!
//! assert_eq!(sum(2, 3), 5);
//!
//! // Overflow wraps, per two's-complement convention.
//! assert_eq!(sum(i32::MAX, 1), i32::MIN);
//! ```

pub mod arith;

use pyo3::prelude::*;

/// Python module definition.
///
/// This function is called by Python when importing the module.
/// It registers all Python-exposed functions.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(arith::py_sum, m)?)?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
