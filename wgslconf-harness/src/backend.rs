//! The backend-under-test contract

use serde::{Deserialize, Serialize};
use thiserror::Error;
use wgslconf_interval::Operation;
use wgslconf_types::{EvaluationStage, Value};

/// How a case's operands are delivered to the backend.
///
/// Constant-folded cases are only meaningful as constant expressions;
/// runtime cases are exercised through both runtime delivery modes, since
/// implementations have been known to take different code paths for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSource {
    /// Operands spliced into the program as constant expressions
    ConstExpression,
    /// Operands read from a uniform buffer
    Uniform,
    /// Operands read from a storage buffer
    Storage,
}

impl InputSource {
    /// Identifier used in reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConstExpression => "const-expression",
            Self::Uniform => "uniform",
            Self::Storage => "storage",
        }
    }

    /// Input sources applicable to a stage
    #[must_use]
    pub const fn for_stage(stage: EvaluationStage) -> &'static [Self] {
        match stage {
            EvaluationStage::ConstantFolded => &[Self::ConstExpression],
            EvaluationStage::RuntimeEvaluated => &[Self::Uniform, Self::Storage],
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for backend evaluation
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    /// The backend does not implement the requested combination
    #[error("backend does not support {0}")]
    Unsupported(String),
    /// Evaluation was started but did not complete
    #[error("evaluation failed: {0}")]
    ExecutionFailed(String),
}

/// A numeric backend under conformance test.
///
/// Implementations compile and execute the operation however they like —
/// the reference backend computes on the host CPU, a real integration
/// assembles a shader and dispatches it — and report back the observed
/// result. Implementations must be safe to call from multiple threads;
/// the runner may pipeline many cases concurrently.
pub trait Backend: Send + Sync {
    /// Human-readable backend name for reports
    fn name(&self) -> &str;

    /// Evaluate `operation` over `inputs`, delivered via `source`, at the
    /// given stage, and return the observed result.
    fn evaluate(
        &self,
        operation: Operation,
        stage: EvaluationStage,
        source: InputSource,
        inputs: &[Value],
    ) -> Result<Value, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_stage_uses_only_const_expressions() {
        assert_eq!(
            InputSource::for_stage(EvaluationStage::ConstantFolded),
            [InputSource::ConstExpression]
        );
        assert_eq!(
            InputSource::for_stage(EvaluationStage::RuntimeEvaluated),
            [InputSource::Uniform, InputSource::Storage]
        );
    }
}
