//! Case records and table keys

use smallvec::SmallVec;
use wgslconf_interval::{Interval, Operation};
use wgslconf_types::{EvaluationStage, NumericKind, OperandShape, Value};

/// Ordered operand signature: the shared numeric kind plus the shape of
/// each operand position.
///
/// All operands of one case share a kind; shapes may mix scalars and
/// vectors for operator-style operations (`vec % scalar`), while builtin
/// calls require one shape across all positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature {
    /// Numeric kind shared by every operand
    pub kind: NumericKind,
    /// Per-operand shape, in operand order
    pub shapes: SmallVec<[OperandShape; 3]>,
}

impl Signature {
    /// All-scalar signature of the given arity
    #[must_use]
    pub fn scalars(kind: NumericKind, arity: usize) -> Self {
        Self {
            kind,
            shapes: (0..arity).map(|_| OperandShape::Scalar).collect(),
        }
    }

    /// All-vector signature of the given arity and width
    #[must_use]
    pub fn vectors(kind: NumericKind, shape: OperandShape, arity: usize) -> Self {
        Self {
            kind,
            shapes: (0..arity).map(|_| shape).collect(),
        }
    }

    /// Binary `vector op scalar` signature
    #[must_use]
    pub fn vector_scalar(kind: NumericKind, shape: OperandShape) -> Self {
        Self {
            kind,
            shapes: SmallVec::from_slice(&[shape, OperandShape::Scalar]),
        }
    }

    /// Binary `scalar op vector` signature
    #[must_use]
    pub fn scalar_vector(kind: NumericKind, shape: OperandShape) -> Self {
        Self {
            kind,
            shapes: SmallVec::from_slice(&[OperandShape::Scalar, shape]),
        }
    }

    /// Width of the result: the widest operand shape. Scalar operands
    /// broadcast across vector operands.
    #[must_use]
    pub fn result_width(&self) -> usize {
        self.shapes.iter().map(|s| s.width()).max().unwrap_or(1)
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.kind)?;
        for (i, s) in self.shapes.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{s}")?;
        }
        f.write_str(")")
    }
}

/// Key identifying one case table: operation × operand signature ×
/// evaluation stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseKey {
    /// Operation under test
    pub operation: Operation,
    /// Operand kind/shape signature
    pub signature: Signature,
    /// Evaluation stage the cases target
    pub stage: EvaluationStage,
}

impl std::fmt::Display for CaseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.operation, self.signature, self.stage)
    }
}

/// Expected outcome of one case
#[derive(Debug, Clone, PartialEq)]
pub enum Expectation {
    /// Exact expected value; integer operations admit no slack
    Exact(Value),
    /// Per-component acceptance intervals; scalars carry one entry
    Intervals(SmallVec<[Interval; 4]>),
}

/// One immutable test unit: operand values, stage, and expected outcome.
///
/// Cases are created once by the generator and never mutated, so a table
/// can be shared freely across concurrent test executions.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// Operand values, in operand order
    pub inputs: SmallVec<[Value; 3]>,
    /// Stage the case targets
    pub stage: EvaluationStage,
    /// Expected outcome
    pub expected: Expectation,
}

impl Case {
    /// Render the operand list for diagnostics
    #[must_use]
    pub fn describe_inputs(&self) -> String {
        let parts: Vec<String> = self.inputs.iter().map(ToString::to_string).collect();
        parts.join(", ")
    }
}
