//! Exact expected values for integer operations
//!
//! Integer operations admit no error slack: a conforming implementation
//! must match the expected value bit for bit. Arithmetic is evaluated in
//! i128 and truncated onto the kind's two's-complement width, which gives
//! the runtime wrapping semantics directly.

use crate::ops::Operation;
use wgslconf_types::NumericKind;

/// Truncate an exact i128 result onto the kind's width.
fn wrap(kind: NumericKind, v: i128) -> i64 {
    match kind {
        NumericKind::Int32 => i64::from(v as i32),
        NumericKind::Uint32 => i64::from(v as u32),
        NumericKind::AbstractInt => v as i64,
        _ => panic!("integer wrap over {kind}"),
    }
}

/// Exact mathematical result before wrapping.
fn exact_i128(op: Operation, operands: &[i64]) -> i128 {
    let a = i128::from(operands[0]);
    match op {
        Operation::Abs => a.abs(),
        Operation::Neg => -a,
        Operation::Add => a + i128::from(operands[1]),
        Operation::Sub => a - i128::from(operands[1]),
        Operation::Mul => a * i128::from(operands[1]),
        Operation::Min => a.min(i128::from(operands[1])),
        Operation::Max => a.max(i128::from(operands[1])),
        Operation::Clamp => a
            .max(i128::from(operands[1]))
            .min(i128::from(operands[2])),
        _ => panic!("{op} has no integer definition"),
    }
}

/// Exact expected value of an integer operation, with runtime wrapping
/// semantics for results outside the kind's range.
///
/// # Panics
/// Panics if the operation has no integer definition, the kind is not an
/// integer kind, or `operands` is shorter than the operation's arity.
#[must_use]
pub fn int_exact(op: Operation, kind: NumericKind, operands: &[i64]) -> i64 {
    wrap(kind, exact_i128(op, operands))
}

/// Whether an integer operand tuple is legal at the constant-folded stage.
///
/// Overflowing arithmetic and `clamp` with `low > high` are compile
/// errors. `abs` of the most negative value is explicitly defined by the
/// governing spec (the result is the operand) and stays legal.
#[must_use]
pub fn int_const_valid(op: Operation, kind: NumericKind, operands: &[i64]) -> bool {
    match op {
        Operation::Clamp => operands[1] <= operands[2],
        Operation::Abs | Operation::Min | Operation::Max => true,
        Operation::Neg | Operation::Add | Operation::Sub | Operation::Mul => {
            let exact = exact_i128(op, operands);
            let (min, max) = match (kind.int_min(), kind.int_max()) {
                (Some(min), Some(max)) => (i128::from(min), i128::from(max)),
                _ => panic!("integer validity over {kind}"),
            };
            min <= exact && exact <= max
        }
        _ => panic!("{op} has no integer definition"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const I32: NumericKind = NumericKind::Int32;
    const U32: NumericKind = NumericKind::Uint32;

    #[test]
    fn clamp_is_min_of_max() {
        assert_eq!(int_exact(Operation::Clamp, I32, &[5, 1, 3]), 3);
        assert_eq!(int_exact(Operation::Clamp, I32, &[0, 1, 3]), 1);
        assert_eq!(int_exact(Operation::Clamp, I32, &[2, 1, 3]), 2);
    }

    #[test]
    fn clamp_inverted_bounds_is_const_invalid_but_runtime_defined() {
        assert!(!int_const_valid(Operation::Clamp, I32, &[2, 3, 1]));
        // Runtime still has a defined value: min(max(2, 3), 1) = 1.
        assert_eq!(int_exact(Operation::Clamp, I32, &[2, 3, 1]), 1);
    }

    #[test]
    fn arithmetic_wraps_at_runtime() {
        let max = i64::from(i32::MAX);
        assert_eq!(int_exact(Operation::Add, I32, &[max, 1]), i64::from(i32::MIN));
        assert_eq!(int_exact(Operation::Mul, U32, &[i64::from(u32::MAX), 2]), 4_294_967_294);
        assert_eq!(int_exact(Operation::Sub, U32, &[0, 1]), i64::from(u32::MAX));
    }

    #[test]
    fn overflow_is_const_invalid() {
        let max = i64::from(i32::MAX);
        assert!(!int_const_valid(Operation::Add, I32, &[max, 1]));
        assert!(int_const_valid(Operation::Add, I32, &[max, 0]));
        assert!(!int_const_valid(Operation::Sub, U32, &[0, 1]));
        assert!(!int_const_valid(Operation::Neg, I32, &[i64::from(i32::MIN)]));
    }

    #[test]
    fn abs_of_most_negative_wraps_and_stays_const_valid() {
        let min = i64::from(i32::MIN);
        assert_eq!(int_exact(Operation::Abs, I32, &[min]), min);
        assert!(int_const_valid(Operation::Abs, I32, &[min]));
    }

    #[test]
    fn abstract_int_uses_full_64_bits() {
        let k = NumericKind::AbstractInt;
        assert_eq!(int_exact(Operation::Add, k, &[i64::MAX, 1]), i64::MIN);
        assert!(!int_const_valid(Operation::Add, k, &[i64::MAX, 1]));
        assert!(int_const_valid(Operation::Add, k, &[i64::MAX, 0]));
    }
}
