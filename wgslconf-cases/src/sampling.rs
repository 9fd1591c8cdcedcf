//! Deterministic operand sampling
//!
//! Integer kinds get small explicit ascending lists covering extremes,
//! small magnitudes, and bit-pattern thresholds; their cross products stay
//! tractable. Floating kinds are far too large to enumerate once operands
//! are combined pairwise or threewise, so they get a *sparse* sample:
//! every boundary and edge-of-rounding value most likely to expose
//! interval bugs, plus a bounded seeded log-spread for mid-range coverage.
//!
//! Everything here is deterministic for a fixed [`SAMPLING_SEED`], which
//! keeps case tables idempotent across requests and across processes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use wgslconf_types::NumericKind;

/// Process-wide sampling seed. Fixed so that every request for the same
/// case key yields the identical sequence.
pub const SAMPLING_SEED: u64 = 0x5747_534c;

/// Number of seeded mid-range values added to each float sample
const SPREAD_PER_SIGN: usize = 8;

/// Number of vector tuples drawn per (kind, width)
const VECTOR_DRAWS: usize = 24;

/// Sample values for an integer kind, ascending.
///
/// The 32-bit lists include both extremes, small values on each side of
/// zero, and values straddling the sign-bit boundary (`0x7000_0000` /
/// `0x8000_0000`).
///
/// # Panics
/// Panics if `kind` is not an integer kind.
#[must_use]
pub fn int_samples(kind: NumericKind) -> &'static [i64] {
    const I32_VALUES: &[i64] = &[
        i32::MIN as i64,
        -2,
        -1,
        0,
        1,
        2,
        0x7000_0000,
        i32::MAX as i64,
    ];
    const U32_VALUES: &[i64] = &[0, 1, 2, 0x7000_0000, 0x8000_0000, u32::MAX as i64];
    const ABSTRACT_VALUES: &[i64] = &[
        i64::MIN,
        i32::MIN as i64,
        -2,
        -1,
        0,
        1,
        2,
        i32::MAX as i64 + 1,
        i64::MAX,
    ];
    match kind {
        NumericKind::Int32 => I32_VALUES,
        NumericKind::Uint32 => U32_VALUES,
        NumericKind::AbstractInt => ABSTRACT_VALUES,
        _ => panic!("integer samples for {kind}"),
    }
}

/// Sparse sample for a floating kind, ascending, on the kind's grid.
///
/// Contains ±0, the subnormal boundaries, the smallest normal, ±1, the
/// finite extremes, both infinities, and a seeded log-spread of finite
/// mid-range magnitudes. NaN is deliberately absent: NaN handling is
/// exercised by the interval functions' own tests, and a NaN operand would
/// make every generated case unconstrained.
///
/// # Panics
/// Panics if `kind` is not a float kind.
#[must_use]
pub fn float_samples(kind: NumericKind) -> Vec<f64> {
    let fmt = kind
        .float_format()
        .unwrap_or_else(|| panic!("float samples for {kind}"));
    let mut out = vec![
        f64::NEG_INFINITY,
        -fmt.max_finite(),
        -1.0,
        -fmt.smallest_normal(),
        -fmt.largest_subnormal(),
        -fmt.smallest_subnormal(),
        -0.0,
        0.0,
        fmt.smallest_subnormal(),
        fmt.largest_subnormal(),
        fmt.smallest_normal(),
        1.0,
        fmt.max_finite(),
        f64::INFINITY,
    ];

    // Seeded mid-range spread: uniform over the exponent range so small
    // and large magnitudes are equally represented, then snapped onto the
    // kind's grid.
    let mut rng = StdRng::seed_from_u64(SAMPLING_SEED ^ u64::from(kind.bit_width()));
    let exp_range = f64::from(fmt.min_exponent())..f64::from(fmt.max_exponent());
    for _ in 0..SPREAD_PER_SIGN {
        let magnitude = 2f64.powf(rng.gen_range(exp_range.clone()));
        let v = fmt.quantize(magnitude);
        out.push(v);
        out.push(-v);
    }

    out.sort_by(f64::total_cmp);
    out.dedup_by(|a, b| a.to_bits() == b.to_bits());
    out
}

/// Deterministic vector operand draws: `VECTOR_DRAWS` tuples of `width`
/// independent draws from the kind's scalar sample, returned as index
/// tuples into that sample.
///
/// Independent draws rather than cross products keep case counts linear
/// in dimension. `salt` distinguishes operand positions so two vector
/// operands of one case are uncorrelated.
#[must_use]
pub fn vector_draws(
    kind: NumericKind,
    width: usize,
    sample_len: usize,
    salt: u64,
) -> Vec<SmallVec<[usize; 4]>> {
    let mut rng = StdRng::seed_from_u64(
        SAMPLING_SEED ^ (u64::from(kind.bit_width()) << 8) ^ ((width as u64) << 4) ^ salt,
    );
    (0..VECTOR_DRAWS)
        .map(|_| (0..width).map(|_| rng.gen_range(0..sample_len)).collect())
        .collect()
}
