//! The closed set of numeric representations under test

use crate::format::FloatFormat;
use serde::{Deserialize, Serialize};

/// A numeric representation a WGSL implementation evaluates builtins over.
///
/// Concrete kinds exist at runtime; the abstract kinds exist only during
/// constant evaluation and are materialized by the implementation's
/// compile-time evaluator (64-bit carriers in both cases).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericKind {
    /// IEEE 754 binary16
    Float16,
    /// IEEE 754 binary32
    Float32,
    /// IEEE 754 binary64
    Float64,
    /// Compile-time float, evaluated in binary64
    AbstractFloat,
    /// 32-bit two's-complement signed integer
    Int32,
    /// 32-bit unsigned integer
    Uint32,
    /// Compile-time integer, evaluated in 64-bit two's complement
    AbstractInt,
}

impl NumericKind {
    /// WGSL-style type name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Float16 => "f16",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::AbstractFloat => "abstract-float",
            Self::Int32 => "i32",
            Self::Uint32 => "u32",
            Self::AbstractInt => "abstract-int",
        }
    }

    /// Storage width in bits
    #[must_use]
    pub const fn bit_width(self) -> u32 {
        match self {
            Self::Float16 => 16,
            Self::Float32 | Self::Int32 | Self::Uint32 => 32,
            Self::Float64 | Self::AbstractFloat | Self::AbstractInt => 64,
        }
    }

    /// Whether this is a floating-point kind
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(
            self,
            Self::Float16 | Self::Float32 | Self::Float64 | Self::AbstractFloat
        )
    }

    /// Whether this is an integer kind
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Int32 | Self::Uint32 | Self::AbstractInt)
    }

    /// Whether values of this kind only exist during constant evaluation
    #[must_use]
    pub const fn is_abstract(self) -> bool {
        matches!(self, Self::AbstractFloat | Self::AbstractInt)
    }

    /// Whether the kind can represent negative values
    #[must_use]
    pub const fn is_signed(self) -> bool {
        !matches!(self, Self::Uint32)
    }

    /// Whether the representation has NaN, infinities, and subnormals
    #[must_use]
    pub const fn has_specials(self) -> bool {
        self.is_float()
    }

    /// Float format layout, for the floating kinds
    #[must_use]
    pub const fn float_format(self) -> Option<FloatFormat> {
        match self {
            Self::Float16 => Some(FloatFormat::BINARY16),
            Self::Float32 => Some(FloatFormat::BINARY32),
            Self::Float64 | Self::AbstractFloat => Some(FloatFormat::BINARY64),
            Self::Int32 | Self::Uint32 | Self::AbstractInt => None,
        }
    }

    /// Smallest representable value, for the integer kinds
    #[must_use]
    pub const fn int_min(self) -> Option<i64> {
        match self {
            Self::Int32 => Some(i32::MIN as i64),
            Self::Uint32 => Some(0),
            Self::AbstractInt => Some(i64::MIN),
            _ => None,
        }
    }

    /// Largest representable value, for the integer kinds
    #[must_use]
    pub const fn int_max(self) -> Option<i64> {
        match self {
            Self::Int32 => Some(i32::MAX as i64),
            Self::Uint32 => Some(u32::MAX as i64),
            Self::AbstractInt => Some(i64::MAX),
            _ => None,
        }
    }

    /// Unit in the last place at magnitude `x`.
    ///
    /// # Panics
    /// Panics if called on an integer kind.
    #[must_use]
    pub fn ulp(self, x: f64) -> f64 {
        self.float_format()
            .unwrap_or_else(|| panic!("ulp() on integer kind {}", self.name()))
            .ulp(x)
    }

    /// Round an exact real result onto this kind's grid (floats only).
    ///
    /// # Panics
    /// Panics if called on an integer kind.
    #[must_use]
    pub fn quantize(self, x: f64) -> f64 {
        self.float_format()
            .unwrap_or_else(|| panic!("quantize() on integer kind {}", self.name()))
            .quantize(x)
    }

    /// Whether `x` is finite and within the kind's finite range
    #[must_use]
    pub fn is_finite_value(self, x: f64) -> bool {
        match self.float_format() {
            Some(fmt) => fmt.is_finite_in(x),
            None => x.is_finite(),
        }
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
