//! Integer Arithmetic
//!
//! This module implements the extension's single operation: wrapping
//! addition of two 32-bit signed integers, plus the coercion layer that
//! turns Python objects into `i32` values (or a `TypeError`).
//!
//! The arithmetic is pure Rust and fully testable without an interpreter;
//! the Python-facing pieces live alongside it in `sum.rs`.

mod sum;

pub use sum::{coerce_int, py_sum, sum, ArgumentError};
