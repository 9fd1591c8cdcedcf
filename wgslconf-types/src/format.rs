//! IEEE 754 binary float format layouts
//!
//! Formats are described by their exponent/significand bit split, the same
//! way a softfloat implementation models them. All boundary values and ULP
//! distances are derived from the layout rather than hard-coded, so the
//! three formats share one code path.

use half::f16;
use serde::{Deserialize, Serialize};

/// Layout of an IEEE 754 binary floating-point format.
///
/// `significand_bits` counts only the explicit (stored) fraction bits; the
/// implicit leading bit is not included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatFormat {
    /// Number of exponent bits
    pub exponent_bits: u32,
    /// Number of stored significand (fraction) bits
    pub significand_bits: u32,
}

impl FloatFormat {
    /// IEEE 754 binary16 (half precision)
    pub const BINARY16: Self = Self {
        exponent_bits: 5,
        significand_bits: 10,
    };

    /// IEEE 754 binary32 (single precision)
    pub const BINARY32: Self = Self {
        exponent_bits: 8,
        significand_bits: 23,
    };

    /// IEEE 754 binary64 (double precision)
    pub const BINARY64: Self = Self {
        exponent_bits: 11,
        significand_bits: 52,
    };

    /// Exponent bias
    #[must_use]
    pub const fn bias(&self) -> i32 {
        (1 << (self.exponent_bits - 1)) - 1
    }

    /// Largest unbiased exponent of a normal value
    #[must_use]
    pub const fn max_exponent(&self) -> i32 {
        self.bias()
    }

    /// Smallest unbiased exponent of a normal value
    #[must_use]
    pub const fn min_exponent(&self) -> i32 {
        1 - self.bias()
    }

    /// Largest finite value of the format
    #[must_use]
    pub fn max_finite(&self) -> f64 {
        let frac = 2.0 - 2f64.powi(-(self.significand_bits as i32));
        frac * 2f64.powi(self.max_exponent())
    }

    /// Smallest positive normal value
    #[must_use]
    pub fn smallest_normal(&self) -> f64 {
        2f64.powi(self.min_exponent())
    }

    /// Smallest positive subnormal value
    #[must_use]
    pub fn smallest_subnormal(&self) -> f64 {
        // Scaled in two steps: binary64's combined exponent is -1074,
        // which a single `powi` underflows to zero.
        2f64.powi(self.min_exponent()) * 2f64.powi(-(self.significand_bits as i32))
    }

    /// Largest positive subnormal value
    #[must_use]
    pub fn largest_subnormal(&self) -> f64 {
        self.smallest_normal() - self.smallest_subnormal()
    }

    /// Unit in the last place at magnitude `x`.
    ///
    /// For the subnormal/zero region this returns the smallest positive
    /// subnormal. At an exact power of two the gap above `x` is used, the
    /// larger of the two neighboring gaps; using the larger gap can only
    /// widen an acceptance bound.
    #[must_use]
    pub fn ulp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let x = x.abs();
        if x < self.smallest_normal() {
            return self.smallest_subnormal();
        }
        // x is a normal f64 here for every supported format, so the
        // exponent can be read straight out of the bit pattern.
        let bits = x.to_bits();
        let e = (((bits >> 52) & 0x7ff) as i32 - 1023).min(self.max_exponent());
        // Scaled in two steps for the same reason as `smallest_subnormal`:
        // binary64's combined exponent can reach -1074, which a single
        // `powi` underflows to zero.
        2f64.powi(e) * 2f64.powi(-(self.significand_bits as i32))
    }

    /// Round an exact real result onto this format's grid.
    ///
    /// Uses round-to-nearest-even; magnitudes that round past the largest
    /// finite value become the correctly signed infinity.
    #[must_use]
    pub fn quantize(&self, x: f64) -> f64 {
        match *self {
            Self::BINARY16 => f16::from_f64(x).to_f64(),
            Self::BINARY32 => f64::from(x as f32),
            _ => x,
        }
    }

    /// Whether `x` is finite and within this format's finite range
    #[must_use]
    pub fn is_finite_in(&self, x: f64) -> bool {
        x.is_finite() && x.abs() <= self.max_finite()
    }
}
