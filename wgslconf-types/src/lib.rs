//! Numeric Type Descriptors for WGSL Conformance Testing
//!
//! This crate provides per-representation metadata for the numeric types a
//! WGSL implementation must support, along with the scalar/vector value
//! model shared by the rest of the suite:
//!
//! - Binary float format layouts (binary16, binary32, binary64) with finite
//!   range boundaries, subnormal boundaries, and ULP computation
//! - Round-to-nearest-even quantization of an exact real result onto a
//!   target representation's grid
//! - The `NumericKind` enumeration covering concrete and abstract
//!   (compile-time only) numeric types
//! - Scalar and fixed-width (2/3/4 component) vector values
//!
//! All real-valued arithmetic in the suite is carried in `f64` and then
//! quantized onto the target grid; integer values are carried in `i64`,
//! which covers i32, u32, and 64-bit abstract integers.
//!
//! Everything here is a pure function of its inputs; there is no global
//! state and no side effects.

#![forbid(unsafe_code)]

mod format;
mod kind;
mod stage;
mod value;

pub use format::FloatFormat;
pub use kind::NumericKind;
pub use stage::EvaluationStage;
pub use value::{OperandShape, ScalarValue, Value, ValueError, ValueResult};
