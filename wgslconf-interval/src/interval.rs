//! The acceptance interval type

/// A closed range of acceptable results over the reals extended with
/// infinities, tagged with whether NaN is also acceptable.
///
/// Invariants:
/// - `lo <= hi`, and neither bound is NaN
/// - The unconstrained "any" interval is `[-inf, +inf]` with NaN accepted,
///   used when the governing spec leaves an outcome implementation-defined
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound (inclusive)
    pub lo: f64,
    /// Upper bound (inclusive)
    pub hi: f64,
    /// Whether an observed NaN is acceptable
    pub accepts_nan: bool,
}

impl Interval {
    /// Create an interval from bounds.
    ///
    /// # Panics
    /// Panics if a bound is NaN or `lo > hi`.
    #[must_use]
    pub fn new(lo: f64, hi: f64) -> Self {
        assert!(!lo.is_nan() && !hi.is_nan(), "NaN interval bound");
        assert!(lo <= hi, "inverted interval [{lo}, {hi}]");
        Self {
            lo,
            hi,
            accepts_nan: false,
        }
    }

    /// Interval holding a single value
    #[must_use]
    pub fn point(v: f64) -> Self {
        Self::new(v, v)
    }

    /// The unconstrained interval: any finite value, infinity, or NaN
    #[must_use]
    pub const fn any() -> Self {
        Self {
            lo: f64::NEG_INFINITY,
            hi: f64::INFINITY,
            accepts_nan: true,
        }
    }

    /// Whether this is the unconstrained interval
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.accepts_nan && self.lo == f64::NEG_INFINITY && self.hi == f64::INFINITY
    }

    /// Whether the interval holds exactly one value
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.lo == self.hi && !self.accepts_nan
    }

    /// Whether both bounds are finite and NaN is not accepted
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && !self.accepts_nan
    }

    /// Whether an observed result is acceptable.
    ///
    /// An observed NaN is acceptable only when the interval accepts NaN;
    /// otherwise membership is the closed-range test. Signed zeros compare
    /// equal, so `[0, 0]` accepts an observed `-0.0`.
    #[must_use]
    pub fn contains(&self, observed: f64) -> bool {
        if observed.is_nan() {
            return self.accepts_nan;
        }
        self.lo <= observed && observed <= self.hi
    }

    /// Smallest interval containing both inputs
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
            accepts_nan: self.accepts_nan || other.accepts_nan,
        }
    }

    /// Whether every value acceptable here is acceptable in `other`
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        (!self.accepts_nan || other.accepts_nan) && other.lo <= self.lo && self.hi <= other.hi
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_any() {
            f.write_str("any")
        } else {
            write!(f, "[{}, {}]", self.lo, self.hi)
        }
    }
}
