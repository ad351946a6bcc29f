//! Greedy pairwise suite generation.
//!
//! Each iteration scores every candidate value per parameter against the
//! still-uncovered pairs, assembles a full case from the per-parameter
//! winners, and checks what that case actually covers. When the greedy
//! picks realize nothing new, a fallback forces one specific uncovered
//! pair into a fresh case so the loop always makes progress.

use std::collections::BTreeSet;

use tracing::debug;

use pharos_ir::types::Parameter;
use pharos_ir::validate::{validate_parameters, ConfigError};

use crate::rng::FillerSource;
use crate::universe::build_pairs;
use crate::{Pair, TestCase};

/// Generate a suite of total test cases covering every pair in the
/// universe of `parameters`.
///
/// Terminates in at most |universe| iterations: the greedy path removes at
/// least one uncovered pair, the fallback path removes exactly one. With
/// exactly one parameter the universe is empty and the suite is empty.
pub fn generate_suite(
    parameters: &[Parameter],
    filler: &mut dyn FillerSource,
) -> Result<Vec<TestCase>, ConfigError> {
    validate_parameters(parameters)?;

    let mut uncovered = build_pairs(parameters);
    let mut suite = Vec::new();

    while !uncovered.is_empty() {
        let case = greedy_case(parameters, &uncovered);

        let covered: Vec<Pair> = uncovered
            .iter()
            .filter(|pair| case.covers(pair))
            .cloned()
            .collect();

        if !covered.is_empty() {
            for pair in &covered {
                uncovered.remove(pair);
            }
            debug!(
                covered = covered.len(),
                remaining = uncovered.len(),
                "greedy case accepted"
            );
            suite.push(case);
        } else if let Some(target) = uncovered.iter().next().cloned() {
            // The per-parameter picks satisfied nothing jointly. Force the
            // first remaining pair; first-in-order keeps the run a pure
            // function of (parameters, filler).
            let case = forced_case(parameters, &target, filler);
            uncovered.remove(&target);
            debug!(remaining = uncovered.len(), "forced case for uncovered pair");
            suite.push(case);
        }
    }

    Ok(suite)
}

/// Assemble a case from the per-parameter best values.
///
/// A value's score counts the uncovered pairs with that (parameter, value)
/// as one half, irrespective of the pair's other half. Parameters are
/// scored independently within the iteration: a later parameter's score is
/// not re-evaluated against the pick already made for an earlier one, so
/// the case may end up covering nothing. Ties go to the first value
/// reaching the maximum in domain order.
fn greedy_case(parameters: &[Parameter], uncovered: &BTreeSet<Pair>) -> TestCase {
    let mut case = TestCase::new();

    for param in parameters {
        let mut best_value: Option<&String> = None;
        let mut best_score = 0usize;

        for value in &param.values {
            let score = uncovered
                .iter()
                .filter(|pair| pair.assigns(&param.name, value))
                .count();
            if best_value.is_none() || score > best_score {
                best_value = Some(value);
                best_score = score;
            }
        }

        if let Some(value) = best_value {
            case.set(&param.name, value);
        }
    }

    case
}

/// Build a case around one specific pair: fill every parameter from the
/// filler source, then overwrite the two forced halves. The filler draw
/// never affects coverage accounting, only the unused slots.
fn forced_case(
    parameters: &[Parameter],
    target: &Pair,
    filler: &mut dyn FillerSource,
) -> TestCase {
    let mut case = TestCase::new();

    for param in parameters {
        case.set(&param.name, filler.pick(&param.values));
    }
    case.set(&target.first().parameter, &target.first().value);
    case.set(&target.second().parameter, &target.second().value);

    case
}
