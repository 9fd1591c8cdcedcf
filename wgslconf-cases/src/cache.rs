//! Memoized, concurrency-safe case tables

use crate::case::{Case, CaseKey};
use crate::generate;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use thiserror::Error;
use tracing::debug;
use wgslconf_interval::Operation;
use wgslconf_types::{EvaluationStage, NumericKind};

/// Error type for case-table requests.
///
/// Every variant is a configuration error in the requesting test's setup,
/// raised before any generation happens; stage-invalid operand tuples are
/// a filtering rule, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The operation is not defined over the requested kind
    #[error("operation '{op}' is not defined over {kind}")]
    UnsupportedOperation {
        /// Requested operation
        op: Operation,
        /// Requested kind
        kind: NumericKind,
    },
    /// Signature arity does not match the operation
    #[error("'{op}' takes {expected} operand(s), signature has {actual}")]
    WrongArity {
        /// Requested operation
        op: Operation,
        /// Operation arity
        expected: usize,
        /// Signature arity
        actual: usize,
    },
    /// Builtin-call operation with differing operand shapes
    #[error("'{op}' requires one shape across all operands")]
    ShapeMixNotAllowed {
        /// Requested operation
        op: Operation,
    },
    /// Vector operands disagree on width
    #[error("vector operands must share one width")]
    MixedVectorWidths,
    /// Abstract kinds only exist during constant evaluation
    #[error("{kind} only exists at the constant-folded stage")]
    AbstractAtRuntime {
        /// Requested kind
        kind: NumericKind,
    },
}

/// Result type for case-table requests
pub type CaseResult<T> = Result<T, CaseError>;

type Table = Arc<[Case]>;

/// Lazily populated, memoized map from case key to case table.
///
/// Tables are generated on first request and retained for the cache's
/// lifetime; generation is a pure function of the key and the fixed
/// sampling seed, so there is no invalidation. Each key holds its own
/// [`OnceLock`] guard, so concurrent first requests for one key compute
/// the table once while requests for other keys proceed unblocked.
#[derive(Debug, Default)]
pub struct CaseCache {
    tables: Mutex<FxHashMap<CaseKey, Arc<OnceLock<Table>>>>,
}

impl CaseCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch (generating and memoizing on first request) the case table
    /// for a key.
    pub fn cases(&self, key: &CaseKey) -> CaseResult<Table> {
        validate_key(key)?;

        // Take the per-key slot under the map lock, then populate it
        // outside the lock so one slow generation does not serialize
        // unrelated keys.
        let slot = {
            let mut tables = self
                .tables
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            Arc::clone(tables.entry(key.clone()).or_default())
        };

        let table = slot.get_or_init(|| {
            let cases = generate::generate(key);
            debug!(key = %key, count = cases.len(), "generated case table");
            Table::from(cases)
        });
        Ok(Arc::clone(table))
    }

    /// Number of memoized tables
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Fail fast on keys the suite cannot generate for.
fn validate_key(key: &CaseKey) -> CaseResult<()> {
    let op = key.operation;
    let kind = key.signature.kind;
    let shapes = &key.signature.shapes;

    if !op.supports(kind) {
        return Err(CaseError::UnsupportedOperation { op, kind });
    }
    if shapes.len() != op.arity() {
        return Err(CaseError::WrongArity {
            op,
            expected: op.arity(),
            actual: shapes.len(),
        });
    }
    if kind.is_abstract() && key.stage == EvaluationStage::RuntimeEvaluated {
        return Err(CaseError::AbstractAtRuntime { kind });
    }

    let widths: Vec<usize> = shapes
        .iter()
        .filter(|s| s.is_vector())
        .map(|s| s.width())
        .collect();
    if widths.windows(2).any(|w| w[0] != w[1]) {
        return Err(CaseError::MixedVectorWidths);
    }
    let mixed = shapes.iter().any(|s| s.is_vector()) && shapes.iter().any(|s| !s.is_vector());
    if mixed && !op.allows_shape_mixing() {
        return Err(CaseError::ShapeMixNotAllowed { op });
    }
    Ok(())
}
