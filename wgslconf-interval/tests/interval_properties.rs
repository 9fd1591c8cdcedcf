//! Property-based tests for the interval engine
//!
//! These check the engine's structural guarantees over randomized
//! operands: self-consistency (the correctly rounded exact result is a
//! member of its own interval), monotonic widening in the ULP count, and
//! the union rule for multi-definition operations.

use proptest::prelude::*;
use wgslconf_interval::{
    binary_interval, int_exact, rounded_interval, ternary_interval, unary_interval, Operation,
};
use wgslconf_types::NumericKind;

/// Finite f32-representable values, carried in f64
fn finite_f32() -> impl Strategy<Value = f64> {
    any::<f32>()
        .prop_filter("finite", |v| v.is_finite())
        .prop_map(f64::from)
}

/// Finite binary16-representable values, carried in f64
fn finite_f16() -> impl Strategy<Value = f64> {
    any::<u16>().prop_map(|bits| {
        let v = half::f16::from_bits(bits).to_f64();
        if v.is_finite() {
            v
        } else {
            0.0
        }
    })
}

proptest! {
    /// The correctly rounded exact result of a binary operation is always
    /// inside the interval generated for it.
    #[test]
    fn binary_self_consistency_f32(x in finite_f32(), y in finite_f32()) {
        for op in [Operation::Add, Operation::Sub, Operation::Mul, Operation::Div,
                   Operation::Min, Operation::Max, Operation::Remainder] {
            let interval = binary_interval(op, NumericKind::Float32, x, y);
            let exact = match op {
                Operation::Add => x + y,
                Operation::Sub => x - y,
                Operation::Mul => x * y,
                Operation::Div => x / y,
                Operation::Min => x.min(y),
                Operation::Max => x.max(y),
                Operation::Remainder => x - y * (x / y).trunc(),
                _ => unreachable!(),
            };
            let rounded = NumericKind::Float32.quantize(exact);
            prop_assert!(
                interval.contains(rounded),
                "{op}({x}, {y}): {rounded} outside {interval}"
            );
        }
    }

    /// Same self-consistency over the much coarser binary16 grid, where
    /// rounding effects are largest.
    #[test]
    fn binary_self_consistency_f16(x in finite_f16(), y in finite_f16()) {
        for op in [Operation::Add, Operation::Mul, Operation::Div] {
            let interval = binary_interval(op, NumericKind::Float16, x, y);
            let exact = match op {
                Operation::Add => x + y,
                Operation::Mul => x * y,
                _ => x / y,
            };
            let rounded = NumericKind::Float16.quantize(exact);
            prop_assert!(
                interval.contains(rounded),
                "{op}({x}, {y}): {rounded} outside {interval}"
            );
        }
    }

    /// Unary operations are exact: the interval is a point at the rounded
    /// result (or unconstrained past the finite range).
    #[test]
    fn unary_is_exact_f16(x in finite_f16()) {
        for op in [Operation::Abs, Operation::Neg, Operation::Floor,
                   Operation::Ceil, Operation::Trunc] {
            let interval = unary_interval(op, NumericKind::Float16, x);
            if interval.is_point() {
                let exact = match op {
                    Operation::Abs => x.abs(),
                    Operation::Neg => -x,
                    Operation::Floor => x.floor(),
                    Operation::Ceil => x.ceil(),
                    Operation::Trunc => x.trunc(),
                    _ => unreachable!(),
                };
                prop_assert_eq!(interval.lo, NumericKind::Float16.quantize(exact));
            }
        }
    }

    /// Raising the permitted ULP count never shrinks an interval.
    #[test]
    fn widening_is_monotonic(exact in finite_f32(), k in 0u32..8) {
        let narrow = rounded_interval(NumericKind::Float32, exact, k);
        let wide = rounded_interval(NumericKind::Float32, exact, k + 1);
        prop_assert!(narrow.is_subset_of(&wide));
    }

    /// Clamp accepts both of its spec-legal definitions.
    #[test]
    fn clamp_accepts_both_definitions(
        e in finite_f32(),
        low in finite_f32(),
        high in finite_f32(),
    ) {
        let kind = NumericKind::Float32;
        let interval = ternary_interval(Operation::Clamp, kind, e, low, high);
        let min_max = kind.quantize(e.max(low).min(high));
        let median = kind.quantize(e.min(low).max(e.max(low).min(high)));
        prop_assert!(interval.contains(min_max));
        prop_assert!(interval.contains(median));
    }

    /// Integer clamp matches the min-max definition bit for bit.
    #[test]
    fn int_clamp_is_exact(e in any::<i32>(), low in any::<i32>(), high in any::<i32>()) {
        let ops = [i64::from(e), i64::from(low), i64::from(high)];
        let expected = i64::from(e).max(i64::from(low)).min(i64::from(high));
        prop_assert_eq!(int_exact(Operation::Clamp, NumericKind::Int32, &ops), expected);
    }

    /// Integer addition wraps exactly like the target's two's complement.
    #[test]
    fn int_add_wraps(a in any::<i32>(), b in any::<i32>()) {
        let expected = i64::from(a.wrapping_add(b));
        prop_assert_eq!(
            int_exact(Operation::Add, NumericKind::Int32, &[i64::from(a), i64::from(b)]),
            expected
        );
    }
}
