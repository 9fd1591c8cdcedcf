//! Evaluation stage an expression is resolved at

use serde::{Deserialize, Serialize};

/// When the implementation under test resolves an expression.
///
/// Constant folding must be fully defined: operand domains are restricted
/// to finite, non-NaN values and operand orderings that are compile errors
/// are excluded from generated cases. Runtime evaluation is unfiltered and
/// may carry implementation-defined imprecision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationStage {
    /// Resolved by the compile-time evaluator
    ConstantFolded,
    /// Resolved during program execution
    RuntimeEvaluated,
}

impl EvaluationStage {
    /// Short identifier used in keys and reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConstantFolded => "const",
            Self::RuntimeEvaluated => "non-const",
        }
    }

    /// Whether this is the constant-folded stage
    #[must_use]
    pub const fn is_const(self) -> bool {
        matches!(self, Self::ConstantFolded)
    }
}

impl std::fmt::Display for EvaluationStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
