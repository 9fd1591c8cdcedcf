//! The closed set of builtin operations under test

use wgslconf_types::NumericKind;

/// A builtin numeric operation the suite can generate cases for.
///
/// The set is closed on purpose: dispatch is an exhaustive match, so adding
/// an operation forces every pairing decision at compile time instead of
/// surfacing as a runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `abs(e)`
    Abs,
    /// `-e`
    Neg,
    /// `floor(e)`
    Floor,
    /// `ceil(e)`
    Ceil,
    /// `trunc(e)`
    Trunc,
    /// `x + y`
    Add,
    /// `x - y`
    Sub,
    /// `x * y`
    Mul,
    /// `x / y`
    Div,
    /// `min(x, y)`
    Min,
    /// `max(x, y)`
    Max,
    /// `x % y`
    Remainder,
    /// `clamp(e, low, high)`
    Clamp,
}

impl Operation {
    /// Identifier used in keys and reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Neg => "neg",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Trunc => "trunc",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Min => "min",
            Self::Max => "max",
            Self::Remainder => "remainder",
            Self::Clamp => "clamp",
        }
    }

    /// Parse an operation identifier
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "abs" => Some(Self::Abs),
            "neg" => Some(Self::Neg),
            "floor" => Some(Self::Floor),
            "ceil" => Some(Self::Ceil),
            "trunc" => Some(Self::Trunc),
            "add" => Some(Self::Add),
            "sub" => Some(Self::Sub),
            "mul" => Some(Self::Mul),
            "div" => Some(Self::Div),
            "min" => Some(Self::Min),
            "max" => Some(Self::Max),
            "remainder" => Some(Self::Remainder),
            "clamp" => Some(Self::Clamp),
            _ => None,
        }
    }

    /// Number of operands
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Abs | Self::Neg | Self::Floor | Self::Ceil | Self::Trunc => 1,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Div
            | Self::Min
            | Self::Max
            | Self::Remainder => 2,
            Self::Clamp => 3,
        }
    }

    /// Whether the operation is defined over the given kind.
    ///
    /// Floor/ceil/trunc are float-only. Division and remainder are
    /// float-only in this suite: their zero-divisor runtime semantics over
    /// integers are backend-defined and not modeled here. Negation is
    /// undefined over unsigned integers.
    #[must_use]
    pub const fn supports(self, kind: NumericKind) -> bool {
        if kind.is_float() {
            return true;
        }
        match self {
            Self::Abs | Self::Add | Self::Sub | Self::Mul | Self::Min | Self::Max | Self::Clamp => {
                true
            }
            Self::Neg => kind.is_signed(),
            Self::Floor | Self::Ceil | Self::Trunc | Self::Div | Self::Remainder => false,
        }
    }

    /// Whether this operation is an operator (scalar/vector operand mixing
    /// allowed) rather than a builtin call (all operands share one shape).
    #[must_use]
    pub const fn allows_shape_mixing(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Remainder
        )
    }

    /// Permitted error as an integer multiple of the ULP at the correctly
    /// rounded result.
    ///
    /// Constants follow the governing accuracy table: add/sub/mul, min/max,
    /// the sign/rounding builtins, and remainder are correctly rounded
    /// (zero slack; remainder gets its freedom from the "any" rule for
    /// implementation-defined operand combinations instead). Division
    /// carries 2.5 ULP, covered here by the integer bound 3. Clamp's slack
    /// comes from the union of its two legal definitions, not from ULPs.
    #[must_use]
    pub const fn ulp_tolerance(self, kind: NumericKind) -> u32 {
        if kind.is_integer() {
            return 0;
        }
        match self {
            Self::Div => 3,
            Self::Abs
            | Self::Neg
            | Self::Floor
            | Self::Ceil
            | Self::Trunc
            | Self::Add
            | Self::Sub
            | Self::Mul
            | Self::Min
            | Self::Max
            | Self::Remainder
            | Self::Clamp => 0,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
