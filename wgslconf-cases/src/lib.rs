//! Case Generation and Caching for WGSL Builtin Numerics
//!
//! This crate turns the interval engine into reusable tables of test
//! cases. A table is requested by key — operation, operand signature, and
//! evaluation stage — and holds one immutable `Case` per retained operand
//! tuple:
//!
//! - Operand tuples come from the sampling engine: small exhaustive lists
//!   for integer kinds, a sparse boundary-plus-seeded-spread sample for
//!   floating kinds, and independent per-component draws for vectors
//! - Tuples illegal at the requested evaluation stage (non-finite
//!   constant-folded operands, `clamp` with `low > high`, overflowing
//!   constant integer arithmetic) are filtered out, modeling compile
//!   errors rather than accepted-anything results
//! - Float cases carry per-component acceptance intervals; integer cases
//!   carry a single exact expected value
//!
//! Tables are memoized per key for the process lifetime. Generation is a
//! pure function of the key and the fixed sampling seed, so recomputation
//! is idempotent; a per-key guard makes concurrent first requests compute
//! the table once.

#![forbid(unsafe_code)]

mod cache;
mod case;
mod generate;
mod sampling;

pub use cache::{CaseCache, CaseError, CaseResult};
pub use case::{Case, CaseKey, Expectation, Signature};
pub use sampling::{float_samples, int_samples, vector_draws, SAMPLING_SEED};
