//! Host-CPU reference backend
//!
//! Computes the correctly rounded result in the target precision: exact
//! f64 arithmetic quantized onto the target grid. By the interval engine's
//! self-consistency invariant this result always lies inside the generated
//! acceptance interval, so the reference backend doubles as an end-to-end
//! test of the whole suite. Input delivery mode is accepted and ignored —
//! there is only one code path on the host.

use crate::backend::{Backend, BackendError, InputSource};
use smallvec::SmallVec;
use tracing::trace;
use wgslconf_interval::{int_exact, Operation};
use wgslconf_types::{EvaluationStage, ScalarValue, Value};

/// A conforming backend implemented on the host CPU
#[derive(Debug, Default)]
pub struct ReferenceBackend;

impl ReferenceBackend {
    /// Create the reference backend
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn float_eval(op: Operation, c: &[f64]) -> f64 {
    match op {
        Operation::Abs => c[0].abs(),
        Operation::Neg => -c[0],
        Operation::Floor => c[0].floor(),
        Operation::Ceil => c[0].ceil(),
        Operation::Trunc => c[0].trunc(),
        Operation::Add => c[0] + c[1],
        Operation::Sub => c[0] - c[1],
        Operation::Mul => c[0] * c[1],
        Operation::Div => c[0] / c[1],
        Operation::Min => c[0].min(c[1]),
        Operation::Max => c[0].max(c[1]),
        // x - y * trunc(x / y); undefined inputs fall out as NaN, which
        // only ever meets a NaN-accepting interval.
        Operation::Remainder => c[0] - c[1] * (c[0] / c[1]).trunc(),
        Operation::Clamp => c[0].max(c[1]).min(c[2]),
    }
}

impl Backend for ReferenceBackend {
    fn name(&self) -> &str {
        "host-reference"
    }

    fn evaluate(
        &self,
        operation: Operation,
        stage: EvaluationStage,
        source: InputSource,
        inputs: &[Value],
    ) -> Result<Value, BackendError> {
        trace!(%operation, %stage, %source, "reference evaluation");
        let first = inputs
            .first()
            .ok_or_else(|| BackendError::ExecutionFailed("no operands".into()))?;
        let kind = first.kind();
        let width = inputs
            .iter()
            .map(|v| v.components().len())
            .max()
            .unwrap_or(1);

        let mut out: SmallVec<[ScalarValue; 4]> = SmallVec::new();
        for c in 0..width {
            let component = |v: &Value| {
                let cs = v.components();
                cs[if cs.len() == 1 { 0 } else { c }]
            };
            if kind.is_float() {
                let comps: SmallVec<[f64; 3]> = inputs
                    .iter()
                    .map(|v| component(v).as_float().unwrap_or(f64::NAN))
                    .collect();
                out.push(ScalarValue::float(kind, float_eval(operation, &comps)));
            } else {
                let comps: SmallVec<[i64; 3]> = inputs
                    .iter()
                    .map(|v| component(v).as_int().unwrap_or(0))
                    .collect();
                let result = int_exact(operation, kind, &comps);
                out.push(ScalarValue::int(kind, result).map_err(|e| {
                    BackendError::ExecutionFailed(format!("result out of range: {e}"))
                })?);
            }
        }

        if width == 1 {
            Ok(Value::Scalar(out[0]))
        } else {
            Value::vector(out)
                .map_err(|e| BackendError::ExecutionFailed(format!("bad result vector: {e}")))
        }
    }
}
