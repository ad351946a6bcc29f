use std::collections::BTreeSet;

use pharos_ir::types::Parameter;
use pharos_pairwise::consolidate::{consolidate, self_pairs};
use pharos_pairwise::generate::generate_suite;
use pharos_pairwise::rng::SeededFiller;
use pharos_pairwise::universe::{build_pairs, universe_size};
use pharos_pairwise::{Pair, TestCase};

fn browser_matrix() -> Vec<Parameter> {
    vec![
        Parameter::new("browser", &["firefox", "chrome", "safari", "edge"]),
        Parameter::new("os", &["linux", "macos", "windows"]),
        Parameter::new("locale", &["en", "de", "ja"]),
        Parameter::new("dark_mode", &["on", "off"]),
    ]
}

fn covered_pairs(suite: &[TestCase], universe: &BTreeSet<Pair>) -> BTreeSet<Pair> {
    universe
        .iter()
        .filter(|pair| suite.iter().any(|case| case.covers(pair)))
        .cloned()
        .collect()
}

#[test]
fn test_full_pipeline_covers_universe() {
    let params = browser_matrix();
    let universe = build_pairs(&params);
    assert_eq!(universe.len(), universe_size(&params));

    let suite = generate_suite(&params, &mut SeededFiller::new(42)).unwrap();

    // Pre-consolidation coverage is exactly the universe: nothing omitted,
    // and every pair a case realizes over these parameters is in it.
    assert_eq!(covered_pairs(&suite, &universe), universe);
    for case in &suite {
        for pair in self_pairs(case) {
            assert!(universe.contains(&pair));
        }
    }
}

#[test]
fn test_suite_is_far_smaller_than_cross_product() {
    let params = browser_matrix();
    let exhaustive: usize = params.iter().map(|p| p.values.len()).product();
    assert_eq!(exhaustive, 72);

    let suite = generate_suite(&params, &mut SeededFiller::new(42)).unwrap();
    assert!(suite.len() < exhaustive);

    // Each case realizes exactly one (browser, os) combination, so the
    // suite can never go below the largest domain product.
    assert!(suite.len() >= 12);
}

#[test]
fn test_generation_is_reproducible() {
    let params = browser_matrix();
    let suite1 = generate_suite(&params, &mut SeededFiller::new(99)).unwrap();
    let suite2 = generate_suite(&params, &mut SeededFiller::new(99)).unwrap();
    assert_eq!(suite1, suite2);
}

#[test]
fn test_consolidated_suite_respects_drop_rule() {
    let params = browser_matrix();
    let suite = generate_suite(&params, &mut SeededFiller::new(42)).unwrap();
    let kept = consolidate(&suite);
    assert!(kept.len() <= suite.len());

    // Every dropped case's self-pairs must already appear among the kept
    // cases' self-pairs.
    let mut kept_pairs: BTreeSet<Pair> = BTreeSet::new();
    for case in &kept {
        kept_pairs.extend(self_pairs(case));
    }
    for case in &suite {
        for pair in self_pairs(case) {
            assert!(kept_pairs.contains(&pair));
        }
    }
}

#[test]
fn test_two_parameter_scenario() {
    let params = vec![
        Parameter::new("A", &["a1", "a2"]),
        Parameter::new("B", &["b1", "b2"]),
    ];
    let universe = build_pairs(&params);
    assert_eq!(universe.len(), 4);

    let suite = generate_suite(&params, &mut SeededFiller::new(42)).unwrap();
    assert_eq!(covered_pairs(&suite, &universe), universe);
    assert!((2..=4).contains(&suite.len()));
}

#[test]
fn test_single_parameter_policy() {
    // One parameter means no pairs to cover; the documented policy is an
    // empty suite.
    let params = vec![Parameter::new("X", &["x", "y", "z"])];
    let suite = generate_suite(&params, &mut SeededFiller::new(42)).unwrap();
    assert!(suite.is_empty());
}
