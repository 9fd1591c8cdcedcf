//! Acceptance-Interval Arithmetic for WGSL Builtin Numerics
//!
//! For a builtin operation and an operand tuple, this crate computes the
//! *acceptance interval*: the closed range of results a conforming
//! implementation is allowed to produce. The general algorithm:
//!
//! 1. Compute the mathematically exact result in f64.
//! 2. A NaN operand, or an operand combination the governing spec leaves
//!    implementation-defined (zero divisor, infinite remainder operand),
//!    yields the unconstrained "any" interval.
//! 3. Otherwise the exact result is rounded to nearest-even onto the target
//!    grid and widened by the operation's permitted error, an integer
//!    multiple of the ULP at the rounded value. Bounds past the finite
//!    range become the correctly signed infinity.
//! 4. Operations with more than one spec-legal definition (clamp) accept
//!    the union of the intervals of every legal definition.
//! 5. Vector operations apply component-wise with no cross-component
//!    coupling.
//!
//! Integer operations admit no slack: the crate computes their single exact
//! expected value instead of an interval.
//!
//! The operation set is a closed enum and every (operation, kind) pairing
//! is dispatched by exhaustive match, so an unsupported pairing is a
//! compile-time-visible code path rather than a runtime lookup failure.

#![forbid(unsafe_code)]

mod exact;
mod float_ops;
mod interval;
mod ops;

pub use exact::{int_const_valid, int_exact};
pub use float_ops::{
    binary_interval, float_const_valid, rounded_interval, ternary_interval, unary_interval,
};
pub use interval::Interval;
pub use ops::Operation;
