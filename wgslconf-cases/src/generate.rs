//! Table generation: operand tuples in, cases out
//!
//! Generation is a pure function of the case key and the fixed sampling
//! seed. Scalar signatures enumerate the full cross product of the scalar
//! samples; signatures with vector operands pair a bounded number of
//! seeded draws instead, keeping case counts linear in dimension. Tuples
//! illegal at the requested stage are skipped, never erred on.

use crate::case::{Case, CaseKey, Expectation};
use crate::sampling::{float_samples, int_samples, vector_draws};
use smallvec::{smallvec, SmallVec};
use wgslconf_interval::{
    binary_interval, float_const_valid, int_const_valid, int_exact, ternary_interval,
    unary_interval, Interval,
};
use wgslconf_types::{NumericKind, ScalarValue, Value};

/// Per-operand component values of one candidate tuple. Scalar operands
/// hold one component and broadcast across vector operands.
type Operand<T> = SmallVec<[T; 4]>;
type Tuple<T> = SmallVec<[Operand<T>; 3]>;

/// Build cases for a validated key.
pub(crate) fn generate(key: &CaseKey) -> Vec<Case> {
    if key.signature.kind.is_float() {
        let sample = float_samples(key.signature.kind);
        candidate_tuples(key, &sample)
            .filter_map(|tuple| float_case(key, &tuple))
            .collect()
    } else {
        let sample = int_samples(key.signature.kind);
        candidate_tuples(key, sample)
            .filter_map(|tuple| int_case(key, &tuple))
            .collect()
    }
}

/// Candidate operand tuples for a signature.
///
/// All-scalar signatures enumerate the cross product; anything with a
/// vector operand uses aligned seeded draws, one draw list per operand
/// position so positions are uncorrelated.
fn candidate_tuples<'a, T: Copy + 'a>(
    key: &CaseKey,
    sample: &'a [T],
) -> Box<dyn Iterator<Item = Tuple<T>> + 'a> {
    let shapes = key.signature.shapes.clone();
    if shapes.iter().all(|s| !s.is_vector()) {
        return scalar_cross_product(sample, shapes.len());
    }

    let kind = key.signature.kind;
    let per_position: Vec<Vec<Operand<T>>> = shapes
        .iter()
        .enumerate()
        .map(|(position, shape)| {
            vector_draws(kind, shape.width(), sample.len(), position as u64)
                .into_iter()
                .map(|indices| indices.into_iter().map(|i| sample[i]).collect())
                .collect()
        })
        .collect();
    let draws = per_position.first().map_or(0, Vec::len);
    Box::new((0..draws).map(move |t| {
        per_position
            .iter()
            .map(|position| position[t].clone())
            .collect()
    }))
}

/// Full cross product of the scalar sample, arity 1..=3.
fn scalar_cross_product<'a, T: Copy + 'a>(
    sample: &'a [T],
    arity: usize,
) -> Box<dyn Iterator<Item = Tuple<T>> + 'a> {
    let one = |v: T| -> Operand<T> { smallvec![v] };
    match arity {
        1 => Box::new(sample.iter().map(move |&x| smallvec![one(x)])),
        2 => Box::new(
            sample
                .iter()
                .flat_map(move |&x| sample.iter().map(move |&y| smallvec![one(x), one(y)])),
        ),
        3 => Box::new(sample.iter().flat_map(move |&x| {
            sample.iter().flat_map(move |&y| {
                sample
                    .iter()
                    .map(move |&z| smallvec![one(x), one(y), one(z)])
            })
        })),
        n => panic!("unsupported arity {n}"),
    }
}

/// Component of operand `o` for result lane `c`, broadcasting scalars.
fn lane<T: Copy>(operand: &Operand<T>, c: usize) -> T {
    if operand.len() == 1 {
        operand[0]
    } else {
        operand[c]
    }
}

/// Build one float case, or `None` if the tuple is excluded at this stage.
fn float_case(key: &CaseKey, tuple: &Tuple<f64>) -> Option<Case> {
    let kind = key.signature.kind;
    let stage = key.stage;
    let op = key.operation;

    if stage.is_const()
        && tuple
            .iter()
            .flatten()
            .any(|&v| !kind.is_finite_value(v))
    {
        return None;
    }

    let width = key.signature.result_width();
    let mut intervals: SmallVec<[Interval; 4]> = SmallVec::new();
    for c in 0..width {
        let comps: SmallVec<[f64; 3]> = tuple.iter().map(|o| lane(o, c)).collect();
        if stage.is_const() && !float_const_valid(op, &comps) {
            return None;
        }
        let interval = match comps.len() {
            1 => unary_interval(op, kind, comps[0]),
            2 => binary_interval(op, kind, comps[0], comps[1]),
            3 => ternary_interval(op, kind, comps[0], comps[1], comps[2]),
            n => panic!("unsupported arity {n}"),
        };
        // Constant folding must be fully defined: a case whose acceptance
        // is unbounded or NaN-tolerant cannot appear at the const stage.
        if stage.is_const() && !interval.is_finite() {
            return None;
        }
        intervals.push(interval);
    }

    Some(Case {
        inputs: operand_values(key, tuple, |v| ScalarValue::float(kind, v)),
        stage,
        expected: Expectation::Intervals(intervals),
    })
}

/// Build one integer case, or `None` if the tuple is excluded at this stage.
fn int_case(key: &CaseKey, tuple: &Tuple<i64>) -> Option<Case> {
    let kind = key.signature.kind;
    let stage = key.stage;
    let op = key.operation;

    let width = key.signature.result_width();
    let mut results: SmallVec<[ScalarValue; 4]> = SmallVec::new();
    for c in 0..width {
        let comps: SmallVec<[i64; 3]> = tuple.iter().map(|o| lane(o, c)).collect();
        if stage.is_const() && !int_const_valid(op, kind, &comps) {
            return None;
        }
        results.push(int_scalar(kind, int_exact(op, kind, &comps)));
    }

    let expected = if width == 1 {
        Value::Scalar(results[0])
    } else {
        vector_value(results)
    };
    Some(Case {
        inputs: operand_values(key, tuple, |v| int_scalar(kind, v)),
        stage,
        expected: Expectation::Exact(expected),
    })
}

/// Turn a tuple back into operand `Value`s in signature order.
fn operand_values<T: Copy>(
    key: &CaseKey,
    tuple: &Tuple<T>,
    scalar: impl Fn(T) -> ScalarValue,
) -> SmallVec<[Value; 3]> {
    key.signature
        .shapes
        .iter()
        .zip(tuple)
        .map(|(shape, operand)| {
            if shape.is_vector() {
                vector_value(operand.iter().map(|&v| scalar(v)).collect())
            } else {
                Value::Scalar(scalar(operand[0]))
            }
        })
        .collect()
}

fn int_scalar(kind: NumericKind, v: i64) -> ScalarValue {
    // Samples and wrapped results are always in range for their kind.
    ScalarValue::int(kind, v)
        .unwrap_or_else(|e| panic!("generator produced out-of-range value: {e}"))
}

fn vector_value(components: SmallVec<[ScalarValue; 4]>) -> Value {
    // Widths come from validated signatures, 2..=4.
    Value::vector(components).unwrap_or_else(|e| panic!("generator produced bad vector: {e}"))
}
