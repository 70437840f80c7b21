//! Which rules fired, and how strongly.
//!
//! Requires the `explain` feature. The list lives in a fixed-capacity
//! `heapless::Vec` sized to the full antecedent cross product, so explaining an
//! evaluation never allocates.

use heapless::Vec;

use crate::controller::{Inference, WashController};
use crate::rules::{DirtDegrees, GreaseDegrees, RuleLookup};
use crate::terms::{DirtTerm, GreaseTerm, WashTerm};

/// Upper bound on fired rules: 5 dirt terms × 3 grease terms.
pub const MAX_FIRED_RULES: usize = 15;

/// One rule with nonzero firing strength.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FiredRule {
    /// Dirt antecedent.
    pub dirt: DirtTerm,
    /// Grease antecedent.
    pub grease: GreaseTerm,
    /// Consequent wash time term.
    pub consequent: WashTerm,
    /// `min(dirt degree, grease degree)`.
    pub strength: f64,
}

/// Rules whose firing strength is positive, in table order (dirt-major).
pub fn fired_rules<R: RuleLookup + ?Sized>(
    rules: &R,
    dirt: &DirtDegrees,
    grease: &GreaseDegrees,
) -> Vec<FiredRule, MAX_FIRED_RULES> {
    let mut fired = Vec::new();
    for (d_term, d) in dirt.iter() {
        for (g_term, g) in grease.iter() {
            let strength = d.min(g);
            if strength <= 0.0 {
                continue;
            }
            if let Some(consequent) = rules.consequent(d_term, g_term) {
                let rule = FiredRule { dirt: d_term, grease: g_term, consequent, strength };
                if fired.push(rule).is_err() {
                    return fired;
                }
            }
        }
    }
    fired
}

/// An evaluation together with the rules that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Explanation {
    /// Fired rules in table order.
    pub fired: Vec<FiredRule, MAX_FIRED_RULES>,
    /// The evaluation being explained.
    pub inference: Inference,
}

impl Explanation {
    /// The rule with the highest strength; the earliest wins ties.
    pub fn strongest(&self) -> Option<&FiredRule> {
        self.fired.iter().fold(None, |best: Option<&FiredRule>, r| match best {
            Some(b) if b.strength >= r.strength => best,
            _ => Some(r),
        })
    }

    /// Fired rules whose consequent is `term`.
    pub fn rules_for(&self, term: WashTerm) -> impl Iterator<Item = &FiredRule> + '_ {
        self.fired.iter().filter(move |r| r.consequent == term)
    }

    /// `true` when the wash time came from the empty-set fallback.
    ///
    /// Rules can fire and still leave the sampled output set empty, so this
    /// is not the same as `fired.is_empty()`.
    pub fn is_fallback(&self) -> bool {
        self.inference.fallback
    }
}

impl<R: RuleLookup> WashController<R> {
    /// Evaluate and list the rules that fired.
    pub fn explain(&self, dirt_level: f64, grease_level: f64) -> Explanation {
        let inference = self.evaluate(dirt_level, grease_level);
        let fired = fired_rules(self.rules(), &inference.dirt, &inference.grease);
        Explanation { fired, inference }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::LinguisticTerm;

    #[test]
    fn test_capacity_covers_every_pair() {
        assert_eq!(MAX_FIRED_RULES, DirtTerm::TERMS.len() * GreaseTerm::TERMS.len());
    }

    #[test]
    fn test_overlap_fires_four_rules() {
        let e = WashController::new().explain(37.5, 37.5);
        assert_eq!(e.fired.len(), 4);
        let pairs: std::vec::Vec<_> = e.fired.iter().map(|r| (r.dirt, r.grease, r.consequent)).collect();
        assert_eq!(
            pairs,
            [
                (DirtTerm::Small, GreaseTerm::Medium, WashTerm::Short),
                (DirtTerm::Small, GreaseTerm::High, WashTerm::Medium),
                (DirtTerm::Medium, GreaseTerm::Medium, WashTerm::Medium),
                (DirtTerm::Medium, GreaseTerm::High, WashTerm::Long),
            ]
        );
        assert_eq!(e.rules_for(WashTerm::Medium).count(), 2);
        assert!(e.fired.iter().all(|r| r.strength == 0.5));
    }

    #[test]
    fn test_strongest_rule() {
        let e = WashController::new().explain(30.0, 10.0);
        let s = e.strongest().unwrap();
        assert_eq!((s.dirt, s.grease, s.consequent), (DirtTerm::Small, GreaseTerm::Small, WashTerm::VeryShort));
        assert!((s.strength - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_fallback_despite_fired_rule() {
        use crate::membership::Triangle;
        use crate::terms::{WashVariable, DIRT_REFERENCE, GREASE, WASH_TIME};
        use crate::vocabulary::Variable;
        use crate::StandardRules;

        let spiked: WashVariable = Variable::from_raw(
            WASH_TIME.name,
            WASH_TIME.domain,
            [
                Triangle::from_raw(10.0, 10.0, 10.0),
                *WASH_TIME.shape(WashTerm::Short),
                *WASH_TIME.shape(WashTerm::Medium),
                *WASH_TIME.shape(WashTerm::Long),
                *WASH_TIME.shape(WashTerm::VeryLong),
            ],
        );
        let c = WashController::from_parts(DIRT_REFERENCE, GREASE, spiked, StandardRules, 1000).unwrap();
        let e = c.explain(0.0, 0.0);
        assert_eq!(e.fired.len(), 1);
        assert!(e.is_fallback());
        assert_eq!(e.inference.wash_time, 0.0);
    }

    #[test]
    fn test_nothing_fires_out_of_range() {
        let e = WashController::new().explain(-100.0, 0.0);
        assert!(e.is_fallback());
        assert!(e.strongest().is_none());
        assert_eq!(e.inference.wash_time, 0.0);
    }
}
