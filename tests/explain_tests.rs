//! Fired-rule listing tests.
//!
//! Run with: `cargo test --features explain`

#![cfg(feature = "explain")]

use fuzzy_wash::explain::{fired_rules, MAX_FIRED_RULES};
use fuzzy_wash::terms::{DIRT_REFERENCE, GREASE};
use fuzzy_wash::{DirtTerm, GreaseTerm, RuleBase, StandardRules, WashController, WashTerm};

#[test]
fn test_fired_strengths_bounded_by_activations() {
    let controller = WashController::new();
    for d in 0..=40 {
        for g in 0..=20 {
            let e = controller.explain(d as f64 * 2.5, g as f64 * 2.5);
            assert!(e.fired.len() <= MAX_FIRED_RULES);
            for r in e.fired.iter() {
                assert!(r.strength > 0.0 && r.strength <= 1.0);
                // A consequent's activation is the max over its fired rules.
                assert!(e.inference.activations.get(r.consequent) >= r.strength);
            }
        }
    }
}

#[test]
fn test_activation_equals_strongest_rule_per_consequent() {
    let e = WashController::new().explain(60.0, 35.0);
    for term in [WashTerm::Medium, WashTerm::Long, WashTerm::VeryLong] {
        let best = e.rules_for(term).map(|r| r.strength).fold(0.0, f64::max);
        assert_eq!(e.inference.activations.get(term), best, "{:?}", term);
    }
}

#[test]
fn test_missing_rules_are_not_listed() {
    let mut base = RuleBase::standard();
    base.remove(DirtTerm::VerySmall, GreaseTerm::Small);
    let fired = fired_rules(&base, &DIRT_REFERENCE.fuzzify(0.0), &GREASE.fuzzify(0.0));
    assert!(fired.is_empty());

    let fired = fired_rules(&StandardRules, &DIRT_REFERENCE.fuzzify(0.0), &GREASE.fuzzify(0.0));
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].consequent, WashTerm::VeryShort);
}
