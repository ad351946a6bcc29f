//! Pair universe construction.
//!
//! For every unordered pair of distinct parameters, every combination of one
//! value from each domain is one coverage obligation. The generated suite is
//! done when every obligation is met.

use std::collections::BTreeSet;

use pharos_ir::types::Parameter;

use crate::{Assignment, Pair};

/// Build the complete set of coverage obligations for `parameters`.
///
/// Parameter names are unique and the index pairs distinct, so the
/// construction cannot emit duplicates. The ordered set keeps every
/// downstream traversal deterministic, including the generator's
/// fallback pick.
pub fn build_pairs(parameters: &[Parameter]) -> BTreeSet<Pair> {
    let mut pairs = BTreeSet::new();

    for i in 0..parameters.len() {
        for j in (i + 1)..parameters.len() {
            for va in &parameters[i].values {
                for vb in &parameters[j].values {
                    pairs.insert(Pair::new(
                        Assignment::new(&parameters[i].name, va),
                        Assignment::new(&parameters[j].name, vb),
                    ));
                }
            }
        }
    }

    pairs
}

/// Closed form for the universe size: sum over all unordered parameter
/// index pairs (i<j) of |domain_i| * |domain_j|.
pub fn universe_size(parameters: &[Parameter]) -> usize {
    let mut size = 0;
    for i in 0..parameters.len() {
        for j in (i + 1)..parameters.len() {
            size += parameters[i].values.len() * parameters[j].values.len();
        }
    }
    size
}
