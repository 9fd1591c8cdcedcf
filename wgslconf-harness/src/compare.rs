//! Per-case comparison of observed results against expectations

use wgslconf_cases::{Case, Expectation};
use wgslconf_types::Value;

/// Outcome of checking one observed result against one case
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    /// Observed result is acceptable
    Pass,
    /// Observed result is not acceptable; carries a diagnostic
    Mismatch(String),
}

impl CaseOutcome {
    /// Whether this outcome is a pass
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Check an observed value against a case's expectation.
///
/// Integer expectations require bit-for-bit equality. Interval
/// expectations require every observed component to lie in its own
/// component's interval — an unconstrained interval and an observed NaN
/// inside a NaN-accepting interval both satisfy. A single failing
/// component fails the whole case.
#[must_use]
pub fn check_case(case: &Case, observed: &Value) -> CaseOutcome {
    match &case.expected {
        Expectation::Exact(expected) => {
            if expected.bit_eq(observed) {
                CaseOutcome::Pass
            } else {
                CaseOutcome::Mismatch(format!("expected {expected}, observed {observed}"))
            }
        }
        Expectation::Intervals(intervals) => {
            let components = observed.components();
            if components.len() != intervals.len() {
                return CaseOutcome::Mismatch(format!(
                    "expected {} component(s), observed {}",
                    intervals.len(),
                    components.len()
                ));
            }
            for (i, (component, interval)) in components.iter().zip(intervals).enumerate() {
                let Some(v) = component.as_float() else {
                    return CaseOutcome::Mismatch(format!(
                        "component {i} is not a float value"
                    ));
                };
                if !interval.contains(v) {
                    return CaseOutcome::Mismatch(format!(
                        "component {i}: observed {v} outside {interval}"
                    ));
                }
            }
            CaseOutcome::Pass
        }
    }
}
