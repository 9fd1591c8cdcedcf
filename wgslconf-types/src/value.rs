//! Scalar and vector values
//!
//! A `Value` is either a scalar or a fixed-width (2/3/4 component) vector
//! whose components all share one `NumericKind`. Floats are carried in
//! `f64`, integers in `i64`; construction quantizes float payloads onto the
//! kind's grid so a value is always exactly representable in its kind.

use crate::kind::NumericKind;
use smallvec::SmallVec;
use thiserror::Error;

/// Error type for value construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Vector width outside 2..=4
    #[error("vector width {0} is not 2, 3, or 4")]
    BadVectorWidth(usize),
    /// Vector components disagree on kind
    #[error("vector mixes kinds {0} and {1}")]
    MixedKinds(NumericKind, NumericKind),
    /// Scalar payload does not fit the kind
    #[error("value {0} out of range for {1}")]
    OutOfRange(i64, NumericKind),
}

/// Result type for value construction
pub type ValueResult<T> = Result<T, ValueError>;

/// Shape of one operand position: a scalar or a vector of fixed width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandShape {
    /// Single scalar
    Scalar,
    /// Two-component vector
    Vec2,
    /// Three-component vector
    Vec3,
    /// Four-component vector
    Vec4,
}

impl OperandShape {
    /// Number of components
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Scalar => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
        }
    }

    /// Shape for a vector of `width` components
    #[must_use]
    pub const fn vector(width: usize) -> Option<Self> {
        match width {
            2 => Some(Self::Vec2),
            3 => Some(Self::Vec3),
            4 => Some(Self::Vec4),
            _ => None,
        }
    }

    /// Whether this shape is a vector
    #[must_use]
    pub const fn is_vector(self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

impl std::fmt::Display for OperandShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar => f.write_str("scalar"),
            Self::Vec2 => f.write_str("vec2"),
            Self::Vec3 => f.write_str("vec3"),
            Self::Vec4 => f.write_str("vec4"),
        }
    }
}

/// A single scalar of a given kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    /// Floating-point scalar; payload is on the kind's grid
    Float {
        /// Representation kind (must be a float kind)
        kind: NumericKind,
        /// Value, exactly representable in `kind`
        value: f64,
    },
    /// Integer scalar
    Int {
        /// Representation kind (must be an integer kind)
        kind: NumericKind,
        /// Value within the kind's range
        value: i64,
    },
}

impl ScalarValue {
    /// Build a float scalar, quantizing onto the kind's grid.
    ///
    /// # Panics
    /// Panics if `kind` is not a float kind.
    #[must_use]
    pub fn float(kind: NumericKind, value: f64) -> Self {
        assert!(kind.is_float(), "float scalar of integer kind {kind}");
        Self::Float {
            kind,
            value: kind.quantize(value),
        }
    }

    /// Build an integer scalar, checking the kind's range.
    pub fn int(kind: NumericKind, value: i64) -> ValueResult<Self> {
        let (min, max) = match (kind.int_min(), kind.int_max()) {
            (Some(min), Some(max)) => (min, max),
            _ => panic!("integer scalar of float kind {kind}"),
        };
        if value < min || value > max {
            return Err(ValueError::OutOfRange(value, kind));
        }
        Ok(Self::Int { kind, value })
    }

    /// Representation kind of this scalar
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::Float { kind, .. } | Self::Int { kind, .. } => *kind,
        }
    }

    /// Float payload, if this is a float scalar
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float { value, .. } => Some(*value),
            Self::Int { .. } => None,
        }
    }

    /// Integer payload, if this is an integer scalar
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int { value, .. } => Some(*value),
            Self::Float { .. } => None,
        }
    }

    /// Bit-for-bit equality, distinguishing -0.0 from 0.0 and treating two
    /// NaNs as equal. Used for exact integer expectations and diagnostics.
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int { kind: ka, value: a }, Self::Int { kind: kb, value: b }) => {
                ka == kb && a == b
            }
            (Self::Float { kind: ka, value: a }, Self::Float { kind: kb, value: b }) => {
                ka == kb && (a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan()))
            }
            _ => false,
        }
    }
}

impl std::fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float { value, .. } => write!(f, "{value}"),
            Self::Int { value, .. } => write!(f, "{value}"),
        }
    }
}

/// A scalar or a 2/3/4 component vector of scalars of one kind
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Single scalar
    Scalar(ScalarValue),
    /// Fixed-width vector; invariant: 2..=4 components of one kind
    Vector(SmallVec<[ScalarValue; 4]>),
}

impl Value {
    /// Build a vector value, enforcing width and uniform kind.
    pub fn vector(components: impl IntoIterator<Item = ScalarValue>) -> ValueResult<Self> {
        let components: SmallVec<[ScalarValue; 4]> = components.into_iter().collect();
        if !(2..=4).contains(&components.len()) {
            return Err(ValueError::BadVectorWidth(components.len()));
        }
        let kind = components[0].kind();
        for c in &components[1..] {
            if c.kind() != kind {
                return Err(ValueError::MixedKinds(kind, c.kind()));
            }
        }
        Ok(Self::Vector(components))
    }

    /// Shared kind of all components
    #[must_use]
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::Scalar(s) => s.kind(),
            Self::Vector(v) => v[0].kind(),
        }
    }

    /// Shape of this value
    #[must_use]
    pub fn shape(&self) -> OperandShape {
        match self {
            Self::Scalar(_) => OperandShape::Scalar,
            // Construction enforces width 2..=4.
            Self::Vector(v) => OperandShape::vector(v.len()).unwrap_or(OperandShape::Vec4),
        }
    }

    /// Components as a slice; a scalar is a one-element slice
    #[must_use]
    pub fn components(&self) -> &[ScalarValue] {
        match self {
            Self::Scalar(s) => std::slice::from_ref(s),
            Self::Vector(v) => v,
        }
    }

    /// Bit-for-bit equality across shape and all components
    #[must_use]
    pub fn bit_eq(&self, other: &Self) -> bool {
        let a = self.components();
        let b = other.components();
        self.shape() == other.shape() && a.len() == b.len() && {
            a.iter().zip(b).all(|(x, y)| x.bit_eq(y))
        }
    }
}

impl From<ScalarValue> for Value {
    fn from(s: ScalarValue) -> Self {
        Self::Scalar(s)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Vector(v) => {
                write!(f, "vec{}(", v.len())?;
                for (i, c) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{c}")?;
                }
                f.write_str(")")
            }
        }
    }
}
