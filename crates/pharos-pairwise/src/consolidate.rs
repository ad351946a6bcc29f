//! Post-generation suite consolidation.
//!
//! Best-effort size reduction: processed in original order, a case is kept
//! iff at least one of the pairs realized by its own assignments has not
//! been recorded yet, and all of its pairs are recorded afterwards whether
//! it was kept or dropped. The first case to realize any given pair is
//! therefore always kept, so a dropped case's pairs all appear among
//! earlier kept cases.

use std::collections::BTreeSet;

use tracing::debug;

use crate::{Assignment, Pair, TestCase};

/// The pairs realized purely by a case's own total assignment.
pub fn self_pairs(case: &TestCase) -> Vec<Pair> {
    let entries: Vec<(&String, &String)> = case.assignments.iter().collect();
    let mut pairs = Vec::new();

    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            pairs.push(Pair::new(
                Assignment::new(entries[i].0, entries[i].1),
                Assignment::new(entries[j].0, entries[j].1),
            ));
        }
    }

    pairs
}

/// Drop cases whose self-pairs were all realized by earlier cases.
pub fn consolidate(suite: &[TestCase]) -> Vec<TestCase> {
    let mut seen: BTreeSet<Pair> = BTreeSet::new();
    let mut kept = Vec::new();

    for case in suite {
        let pairs = self_pairs(case);
        if pairs.iter().any(|pair| !seen.contains(pair)) {
            kept.push(case.clone());
        }
        seen.extend(pairs);
    }

    debug!(
        before = suite.len(),
        after = kept.len(),
        "consolidated suite"
    );
    kept
}
