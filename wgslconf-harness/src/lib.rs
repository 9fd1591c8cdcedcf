//! Execution Harness Contract for WGSL Numeric Conformance
//!
//! The interval engine and case generator are pure; this crate is the seam
//! to the impure world. It defines:
//!
//! - [`Backend`], the trait a backend under test implements: evaluate one
//!   operation for one case's operands under a given input-delivery mode
//!   and hand back the observed value
//! - The comparator: integer results must match bit for bit, float results
//!   must land inside their per-component acceptance intervals, with an
//!   unconstrained interval and an observed NaN both auto-satisfying
//! - [`ConformanceRunner`], which walks a case table, evaluates every case
//!   under every applicable input source, never aborts on a case failure,
//!   and collects a serializable [`RunReport`]
//! - [`ReferenceBackend`], a host-CPU implementation that computes the
//!   correctly rounded result in the target precision; it exists so the
//!   suite can test itself and serves as the model backend integration
//!
//! Shader assembly, pipeline setup, and GPU dispatch stay outside this
//! crate; a real integration implements [`Backend`] on top of them.

#![forbid(unsafe_code)]

mod backend;
mod compare;
mod reference;
mod runner;

pub use backend::{Backend, BackendError, InputSource};
pub use compare::{check_case, CaseOutcome};
pub use reference::ReferenceBackend;
pub use runner::{ConformanceRunner, FailureRecord, RunReport};
