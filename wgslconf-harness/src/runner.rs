//! The conformance run loop

use crate::backend::{Backend, InputSource};
use crate::compare::{check_case, CaseOutcome};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wgslconf_cases::{CaseCache, CaseKey, CaseResult, Expectation};

/// One failed or errored evaluation, with diagnostics for the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Index of the case in its table
    pub case_index: usize,
    /// Input-delivery mode the failure occurred under
    pub source: String,
    /// Rendered operand list
    pub inputs: String,
    /// Rendered expectation
    pub expected: String,
    /// Rendered observation, or the backend error
    pub observed: String,
}

/// Outcome of running one case table against one backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Backend under test
    pub backend: String,
    /// Case-table key, rendered
    pub key: String,
    /// Cases in the table
    pub case_count: usize,
    /// Evaluations attempted (cases × applicable input sources)
    pub attempted: usize,
    /// Evaluations that passed
    pub passed: usize,
    /// Evaluations whose observed value was rejected
    pub failed: usize,
    /// Evaluations the backend could not complete; these cases stay
    /// unevaluated rather than counting as failures
    pub errors: usize,
    /// Per-failure diagnostics
    pub failures: Vec<FailureRecord>,
}

impl RunReport {
    /// Whether every attempted evaluation passed
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Walks case tables and checks a backend against them.
///
/// A case failure is recorded and the run continues — one pass over a
/// table should surface every diagnostic, not stop at the first. Only a
/// configuration error (a key the suite cannot generate for) aborts.
pub struct ConformanceRunner<'a, B: Backend> {
    backend: &'a B,
    cache: &'a CaseCache,
}

impl<'a, B: Backend> ConformanceRunner<'a, B> {
    /// Create a runner over a backend and a shared case cache
    #[must_use]
    pub fn new(backend: &'a B, cache: &'a CaseCache) -> Self {
        Self { backend, cache }
    }

    /// Run every case in the table for `key`, under every input source
    /// applicable to the key's stage.
    pub fn run(&self, key: &CaseKey) -> CaseResult<RunReport> {
        let cases = self.cache.cases(key)?;
        info!(key = %key, cases = cases.len(), backend = self.backend.name(), "starting run");

        let mut report = RunReport {
            backend: self.backend.name().to_string(),
            key: key.to_string(),
            case_count: cases.len(),
            attempted: 0,
            passed: 0,
            failed: 0,
            errors: 0,
            failures: Vec::new(),
        };

        for (case_index, case) in cases.iter().enumerate() {
            for &source in InputSource::for_stage(case.stage) {
                report.attempted += 1;
                let observed =
                    self.backend
                        .evaluate(key.operation, case.stage, source, &case.inputs);
                match observed {
                    Ok(observed) => match check_case(case, &observed) {
                        CaseOutcome::Pass => report.passed += 1,
                        CaseOutcome::Mismatch(detail) => {
                            report.failed += 1;
                            warn!(case_index, %source, detail, "case failed");
                            report.failures.push(FailureRecord {
                                case_index,
                                source: source.to_string(),
                                inputs: case.describe_inputs(),
                                expected: describe_expectation(&case.expected),
                                observed: detail,
                            });
                        }
                    },
                    Err(e) => {
                        report.errors += 1;
                        warn!(case_index, %source, error = %e, "case not evaluated");
                        report.failures.push(FailureRecord {
                            case_index,
                            source: source.to_string(),
                            inputs: case.describe_inputs(),
                            expected: describe_expectation(&case.expected),
                            observed: format!("not evaluated: {e}"),
                        });
                    }
                }
            }
        }

        info!(
            key = %key,
            passed = report.passed,
            failed = report.failed,
            errors = report.errors,
            "run finished"
        );
        Ok(report)
    }
}

fn describe_expectation(expected: &Expectation) -> String {
    match expected {
        Expectation::Exact(v) => v.to_string(),
        Expectation::Intervals(intervals) => {
            let parts: Vec<String> = intervals.iter().map(ToString::to_string).collect();
            parts.join(", ")
        }
    }
}
