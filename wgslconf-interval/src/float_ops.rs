//! Acceptance-interval computation for floating-point operations
//!
//! All exact arithmetic is carried in f64, which has strictly more
//! precision than any target grid except binary64 itself, then rounded
//! onto the target and widened by the operation's ULP tolerance.

use crate::interval::Interval;
use crate::ops::Operation;
use wgslconf_types::NumericKind;

/// Round an exact real result onto `kind`'s grid and widen by `ulps`
/// ULPs at the rounded value.
///
/// A NaN exact result (undefined operand combination) yields the
/// unconstrained interval. An exact result past the finite range yields a
/// bound of the correctly signed infinity, with the nearest finite extreme
/// kept as the other bound so saturating implementations also pass.
///
/// # Panics
/// Panics if `kind` is not a float kind.
#[must_use]
pub fn rounded_interval(kind: NumericKind, exact: f64, ulps: u32) -> Interval {
    let fmt = kind
        .float_format()
        .unwrap_or_else(|| panic!("float interval over {kind}"));
    if exact.is_nan() {
        return Interval::any();
    }
    let max = fmt.max_finite();
    if exact > max {
        return Interval::new(max, f64::INFINITY);
    }
    if exact < -max {
        return Interval::new(f64::NEG_INFINITY, -max);
    }

    let rounded = fmt.quantize(exact);
    if ulps == 0 {
        return Interval::point(rounded);
    }
    let slack = fmt.ulp(rounded) * f64::from(ulps);
    let lo = rounded - slack;
    let hi = rounded + slack;
    Interval::new(
        if lo < -max { f64::NEG_INFINITY } else { lo },
        if hi > max { f64::INFINITY } else { hi },
    )
}

/// Acceptance interval for a unary operation on one component.
///
/// # Panics
/// Panics if `op` is not unary or `kind` is not a float kind.
#[must_use]
pub fn unary_interval(op: Operation, kind: NumericKind, x: f64) -> Interval {
    if x.is_nan() {
        return Interval::any();
    }
    let exact = match op {
        Operation::Abs => x.abs(),
        Operation::Neg => -x,
        Operation::Floor => x.floor(),
        Operation::Ceil => x.ceil(),
        Operation::Trunc => x.trunc(),
        _ => panic!("{op} is not unary"),
    };
    rounded_interval(kind, exact, op.ulp_tolerance(kind))
}

/// Acceptance interval for a binary operation on one component pair.
///
/// Implementation-defined operand combinations (a NaN operand, a zero
/// divisor, an infinite remainder operand) yield the unconstrained
/// interval; so does an exact result that is itself undefined, such as
/// `inf - inf` or `0 * inf`.
///
/// # Panics
/// Panics if `op` is not binary or `kind` is not a float kind.
#[must_use]
pub fn binary_interval(op: Operation, kind: NumericKind, x: f64, y: f64) -> Interval {
    if x.is_nan() || y.is_nan() {
        return Interval::any();
    }
    let exact = match op {
        Operation::Add => x + y,
        Operation::Sub => x - y,
        Operation::Mul => x * y,
        Operation::Div => {
            if y == 0.0 {
                return Interval::any();
            }
            x / y
        }
        Operation::Min => x.min(y),
        Operation::Max => x.max(y),
        Operation::Remainder => {
            if y == 0.0 || x.is_infinite() || y.is_infinite() {
                return Interval::any();
            }
            x - y * (x / y).trunc()
        }
        _ => panic!("{op} is not binary"),
    };
    rounded_interval(kind, exact, op.ulp_tolerance(kind))
}

/// Acceptance interval for a ternary operation on one component triple.
///
/// Clamp has two spec-legal definitions, `min(max(e, low), high)` and the
/// median of the three operands; the result is the union of both
/// definitions' intervals, so an implementation conforming to either one
/// passes. The definitions only diverge when `low > high`, an ordering
/// that is a compile error at the constant-folded stage and
/// implementation-divergent at runtime.
///
/// # Panics
/// Panics if `op` is not ternary or `kind` is not a float kind.
#[must_use]
pub fn ternary_interval(op: Operation, kind: NumericKind, x: f64, y: f64, z: f64) -> Interval {
    if x.is_nan() || y.is_nan() || z.is_nan() {
        return Interval::any();
    }
    match op {
        Operation::Clamp => {
            let ulps = op.ulp_tolerance(kind);
            let min_max = x.max(y).min(z);
            let median = x.min(y).max(x.max(y).min(z));
            rounded_interval(kind, min_max, ulps).union(&rounded_interval(kind, median, ulps))
        }
        _ => panic!("{op} is not ternary"),
    }
}

/// Whether an operand ordering is legal at the constant-folded stage.
///
/// Clamp with `low > high` is a compile error, modeled by excluding the
/// combination from generated cases rather than assigning an interval.
/// Operand finiteness is checked separately by the case generator.
#[must_use]
pub fn float_const_valid(op: Operation, operands: &[f64]) -> bool {
    match op {
        Operation::Clamp => operands[1] <= operands[2],
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const F16: NumericKind = NumericKind::Float16;
    const F32: NumericKind = NumericKind::Float32;

    #[test]
    fn remainder_with_infinite_operand_is_unconstrained() {
        assert!(binary_interval(Operation::Remainder, F16, f64::INFINITY, 2.0).is_any());
        assert!(binary_interval(Operation::Remainder, F16, 5.0, f64::NEG_INFINITY).is_any());
    }

    #[test]
    fn remainder_with_zero_divisor_is_unconstrained() {
        assert!(binary_interval(Operation::Remainder, F16, 1.0, 0.0).is_any());
        assert!(binary_interval(Operation::Remainder, F16, 1.0, -0.0).is_any());
    }

    #[test]
    fn remainder_of_exact_operands_collapses_to_a_point() {
        // 7.5 % 2 = 1.5; every value involved is exactly representable in
        // binary16, so the interval is the single exact result.
        let i = binary_interval(Operation::Remainder, F16, 7.5, 2.0);
        assert!(i.is_point());
        assert_eq!(i.lo, 1.5);
    }

    #[test]
    fn nan_operand_is_unconstrained() {
        assert!(binary_interval(Operation::Add, F32, f64::NAN, 1.0).is_any());
        assert!(unary_interval(Operation::Abs, F32, f64::NAN).is_any());
        assert!(ternary_interval(Operation::Clamp, F32, 1.0, f64::NAN, 2.0).is_any());
    }

    #[test]
    fn undefined_exact_result_is_unconstrained() {
        assert!(binary_interval(Operation::Sub, F32, f64::INFINITY, f64::INFINITY).is_any());
        assert!(binary_interval(Operation::Mul, F32, 0.0, f64::INFINITY).is_any());
        assert!(binary_interval(Operation::Div, F32, f64::INFINITY, f64::INFINITY).is_any());
    }

    #[test]
    fn addition_overflow_accepts_saturation_or_infinity() {
        let i = binary_interval(Operation::Add, F16, 65504.0, 65504.0);
        assert_eq!(i.lo, 65504.0);
        assert_eq!(i.hi, f64::INFINITY);
        assert!(!i.accepts_nan);
    }

    #[test]
    fn division_carries_ulp_slack() {
        let i = binary_interval(Operation::Div, F32, 1.0, 3.0);
        let rounded = F32.quantize(1.0 / 3.0);
        assert!(i.contains(rounded));
        assert!(i.lo < rounded && rounded < i.hi);
        // Exactly representable quotients still carry the slack band.
        let j = binary_interval(Operation::Div, F32, 1.0, 2.0);
        assert!(j.contains(0.5));
        assert!(!j.is_point());
    }

    #[test]
    fn clamp_with_ordered_bounds_is_exact() {
        let i = ternary_interval(Operation::Clamp, F32, 5.0, 1.0, 3.0);
        assert!(i.is_point());
        assert_eq!(i.lo, 3.0);
    }

    #[test]
    fn clamp_with_inverted_bounds_accepts_both_definitions() {
        // low = 3, high = 1: min(max(e, 3), 1) = 1, median(2, 3, 1) = 2.
        let i = ternary_interval(Operation::Clamp, F32, 2.0, 3.0, 1.0);
        assert!(i.contains(1.0));
        assert!(i.contains(2.0));
        assert_eq!(i.lo, 1.0);
        assert_eq!(i.hi, 2.0);
    }

    #[test]
    fn clamp_inverted_ordering_is_const_invalid() {
        assert!(!float_const_valid(Operation::Clamp, &[2.0, 3.0, 1.0]));
        assert!(float_const_valid(Operation::Clamp, &[2.0, 1.0, 3.0]));
        assert!(float_const_valid(Operation::Add, &[1.0, 2.0]));
    }

    #[test]
    fn rounded_result_stays_inside_its_own_interval() {
        // Self-consistency: the correctly rounded exact result is a member
        // of the interval generated from it.
        let samples = [0.1, 1.0 / 3.0, 1234.5678, -0.0625, 6.1e-5];
        for kind in [F16, F32] {
            for x in samples {
                for y in samples {
                    for op in [Operation::Add, Operation::Mul, Operation::Div] {
                        let i = binary_interval(op, kind, x, y);
                        let exact = match op {
                            Operation::Add => x + y,
                            Operation::Mul => x * y,
                            _ => x / y,
                        };
                        assert!(
                            i.contains(kind.quantize(exact)),
                            "{op} {kind} ({x}, {y}) -> {i}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn widening_is_monotonic_in_ulps() {
        for k in 0..4 {
            let narrow = rounded_interval(F16, 0.1, k);
            let wide = rounded_interval(F16, 0.1, k + 1);
            assert!(narrow.is_subset_of(&wide));
        }
    }

    #[test]
    fn subnormal_result_widens_by_the_smallest_subnormal() {
        let fmt = F16.float_format().unwrap();
        let i = rounded_interval(F16, fmt.smallest_subnormal(), 1);
        assert_eq!(i.hi - i.lo, 2.0 * fmt.smallest_subnormal());
    }
}
