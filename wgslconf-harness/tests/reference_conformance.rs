//! The suite tested against itself: the host reference backend must pass
//! every generated case, and an intentionally wrong backend must not.

use wgslconf_cases::{CaseCache, CaseKey, Signature};
use wgslconf_harness::{
    Backend, BackendError, ConformanceRunner, InputSource, ReferenceBackend,
};
use wgslconf_interval::Operation;
use wgslconf_types::{EvaluationStage, NumericKind, OperandShape, ScalarValue, Value};

fn key(op: Operation, sig: Signature, stage: EvaluationStage) -> CaseKey {
    CaseKey {
        operation: op,
        signature: sig,
        stage,
    }
}

#[test]
fn reference_backend_passes_every_table() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let cache = CaseCache::new();
    let backend = ReferenceBackend::new();
    let runner = ConformanceRunner::new(&backend, &cache);

    let mut keys = Vec::new();
    for stage in [
        EvaluationStage::ConstantFolded,
        EvaluationStage::RuntimeEvaluated,
    ] {
        for kind in [NumericKind::Float16, NumericKind::Float32] {
            for op in [
                Operation::Add,
                Operation::Div,
                Operation::Min,
                Operation::Remainder,
            ] {
                keys.push(key(op, Signature::scalars(kind, 2), stage));
            }
            keys.push(key(Operation::Clamp, Signature::scalars(kind, 3), stage));
            keys.push(key(Operation::Abs, Signature::scalars(kind, 1), stage));
            keys.push(key(
                Operation::Remainder,
                Signature::vector_scalar(kind, OperandShape::Vec3),
                stage,
            ));
            keys.push(key(
                Operation::Add,
                Signature::vectors(kind, OperandShape::Vec4, 2),
                stage,
            ));
        }
        for kind in [NumericKind::Int32, NumericKind::Uint32] {
            keys.push(key(Operation::Clamp, Signature::scalars(kind, 3), stage));
            keys.push(key(Operation::Add, Signature::scalars(kind, 2), stage));
            keys.push(key(
                Operation::Max,
                Signature::vectors(kind, OperandShape::Vec2, 2),
                stage,
            ));
        }
    }
    keys.push(key(
        Operation::Mul,
        Signature::scalars(NumericKind::AbstractInt, 2),
        EvaluationStage::ConstantFolded,
    ));
    keys.push(key(
        Operation::Div,
        Signature::scalars(NumericKind::AbstractFloat, 2),
        EvaluationStage::ConstantFolded,
    ));

    for k in &keys {
        let report = runner.run(k).unwrap();
        assert!(report.attempted > 0, "{k}: empty run");
        assert!(
            report.all_passed(),
            "{k}: {} failures, first: {:?}",
            report.failed + report.errors,
            report.failures.first()
        );
    }
}

/// A backend that returns results one grid step off for exact operations.
struct OffByOneBackend {
    inner: ReferenceBackend,
}

impl Backend for OffByOneBackend {
    fn name(&self) -> &str {
        "off-by-one"
    }

    fn evaluate(
        &self,
        operation: Operation,
        stage: EvaluationStage,
        source: InputSource,
        inputs: &[Value],
    ) -> Result<Value, BackendError> {
        let observed = self.inner.evaluate(operation, stage, source, inputs)?;
        let Value::Scalar(s) = observed else {
            return Ok(observed);
        };
        match s {
            ScalarValue::Int { kind, value } => Ok(Value::Scalar(
                ScalarValue::int(kind, value.wrapping_add(1).min(kind.int_max().unwrap_or(value)))
                    .map_err(|e| BackendError::ExecutionFailed(e.to_string()))?,
            )),
            ScalarValue::Float { kind, value } => {
                let nudged = if value.is_finite() {
                    value + kind.ulp(value) * 4.0
                } else {
                    value
                };
                Ok(Value::Scalar(ScalarValue::float(kind, nudged)))
            }
        }
    }
}

#[test]
fn nonconforming_backend_is_rejected_but_run_completes() {
    let cache = CaseCache::new();
    let backend = OffByOneBackend {
        inner: ReferenceBackend::new(),
    };
    let runner = ConformanceRunner::new(&backend, &cache);

    let report = runner
        .run(&key(
            Operation::Clamp,
            Signature::scalars(NumericKind::Int32, 3),
            EvaluationStage::RuntimeEvaluated,
        ))
        .unwrap();
    // Every case was still attempted; failures were collected, not fatal.
    assert_eq!(report.attempted, report.case_count * 2);
    assert!(report.failed > 0);
    assert!(!report.all_passed());
    assert_eq!(report.failed, report.failures.len());
}

#[test]
fn reports_serialize_to_json() {
    let cache = CaseCache::new();
    let backend = ReferenceBackend::new();
    let runner = ConformanceRunner::new(&backend, &cache);
    let report = runner
        .run(&key(
            Operation::Min,
            Signature::scalars(NumericKind::Uint32, 2),
            EvaluationStage::RuntimeEvaluated,
        ))
        .unwrap();
    let json = report.to_json().unwrap();
    assert!(json.contains("\"backend\": \"host-reference\""));
    assert!(json.contains("\"failed\": 0"));
}

#[test]
fn configuration_errors_abort_instead_of_running() {
    let cache = CaseCache::new();
    let backend = ReferenceBackend::new();
    let runner = ConformanceRunner::new(&backend, &cache);
    assert!(runner
        .run(&key(
            Operation::Remainder,
            Signature::scalars(NumericKind::Uint32, 2),
            EvaluationStage::RuntimeEvaluated,
        ))
        .is_err());
}
