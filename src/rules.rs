/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Rule base and max-min inference.
//!
//! A rule maps an antecedent pair `(dirt term, grease term)` to a wash time
//! term. Inference runs every antecedent pair through the rule base:
//!
//! ```text
//! strength            = min(dirt_degree, grease_degree)     fuzzy AND
//! output[consequent]  = max(output[consequent], strength)   aggregation
//! ```
//!
//! Two rule sources implement [`RuleLookup`]:
//!
//! - [`StandardRules`]: the compile-time 5 × 3 table. Exhaustive by
//!   construction.
//! - [`RuleBase`]: a `hashbrown` map built at start-up, possibly partial.
//!   Pairs with no rule are skipped.
//!
//! # Invariants
//!
//! - Activations start at 0.0 and are only ever raised.
//! - The result does not depend on pair iteration order.

use hashbrown::HashMap;

use crate::terms::{DirtTerm, GreaseTerm, WashTerm};
use crate::vocabulary::{Degrees, LinguisticTerm};

/// Fuzzified dirt reading.
pub type DirtDegrees = Degrees<DirtTerm, 5>;
/// Fuzzified grease reading.
pub type GreaseDegrees = Degrees<GreaseTerm, 3>;
/// Aggregated activation level per wash time term.
pub type Activations = Degrees<WashTerm, 5>;

// ─── Rule lookup ─────────────────────────────────────────────────────────────

/// Source of rule consequents.
pub trait RuleLookup {
    /// Consequent for `(dirt, grease)`, or `None` when no rule covers the pair.
    fn consequent(&self, dirt: DirtTerm, grease: GreaseTerm) -> Option<WashTerm>;
}

impl<R: RuleLookup + ?Sized> RuleLookup for &R {
    fn consequent(&self, dirt: DirtTerm, grease: GreaseTerm) -> Option<WashTerm> {
        (**self).consequent(dirt, grease)
    }
}

// ─── Standard table ──────────────────────────────────────────────────────────

use WashTerm::{Long as HT, Medium as MT, Short as ST, VeryLong as VHT, VeryShort as VST};

/// Consequents indexed `[dirt][grease]`.
///
/// ```text
///          SG    MG    HG
/// VSD     VST   VST    ST
/// SD      VST    ST    MT
/// MD       ST    MT    HT
/// HD       MT    HT   VHT
/// VHD      HT   VHT   VHT
/// ```
pub const RULE_TABLE: [[WashTerm; 3]; 5] = [
    [VST, VST, ST],
    [VST, ST, MT],
    [ST, MT, HT],
    [MT, HT, VHT],
    [HT, VHT, VHT],
];

/// The standard washing rule table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl RuleLookup for StandardRules {
    fn consequent(&self, dirt: DirtTerm, grease: GreaseTerm) -> Option<WashTerm> {
        Some(RULE_TABLE[dirt.index()][grease.index()])
    }
}

// ─── Runtime rule base ───────────────────────────────────────────────────────

/// Rule set keyed by antecedent pair.
///
/// Built once and then shared read-only. May leave pairs unmapped; inference
/// skips those pairs.
#[derive(Clone, Debug, Default)]
pub struct RuleBase {
    rules: HashMap<(DirtTerm, GreaseTerm), WashTerm>,
}

impl RuleBase {
    /// A rule base with no rules.
    pub fn empty() -> Self {
        Self { rules: HashMap::new() }
    }

    /// A rule base holding every entry of [`RULE_TABLE`].
    pub fn standard() -> Self {
        let mut base = Self::empty();
        for dirt in DirtTerm::TERMS {
            for grease in GreaseTerm::TERMS {
                base.insert(dirt, grease, RULE_TABLE[dirt.index()][grease.index()]);
            }
        }
        base
    }

    /// Collect rules from `(dirt, grease, consequent)` triples. Later
    /// duplicates replace earlier ones.
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = (DirtTerm, GreaseTerm, WashTerm)>,
    {
        let mut base = Self::empty();
        for (dirt, grease, consequent) in rules {
            base.insert(dirt, grease, consequent);
        }
        base
    }

    /// Set the consequent for a pair, returning the one it replaced.
    pub fn insert(&mut self, dirt: DirtTerm, grease: GreaseTerm, consequent: WashTerm) -> Option<WashTerm> {
        self.rules.insert((dirt, grease), consequent)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_rule(mut self, dirt: DirtTerm, grease: GreaseTerm, consequent: WashTerm) -> Self {
        self.insert(dirt, grease, consequent);
        self
    }

    /// Remove the rule for a pair.
    pub fn remove(&mut self, dirt: DirtTerm, grease: GreaseTerm) -> Option<WashTerm> {
        self.rules.remove(&(dirt, grease))
    }

    /// Number of mapped pairs.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` when no pair is mapped.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// `true` when every antecedent pair has a rule.
    pub fn is_complete(&self) -> bool {
        self.missing_pairs().next().is_none()
    }

    /// Antecedent pairs without a rule, in table order.
    pub fn missing_pairs(&self) -> impl Iterator<Item = (DirtTerm, GreaseTerm)> + '_ {
        DirtTerm::TERMS
            .into_iter()
            .flat_map(|d| GreaseTerm::TERMS.into_iter().map(move |g| (d, g)))
            .filter(move |pair| !self.rules.contains_key(pair))
    }
}

impl RuleLookup for RuleBase {
    fn consequent(&self, dirt: DirtTerm, grease: GreaseTerm) -> Option<WashTerm> {
        self.rules.get(&(dirt, grease)).copied()
    }
}

// ─── Inference ───────────────────────────────────────────────────────────────

/// Max-min composition of two fuzzified inputs through `rules`.
pub fn infer<R: RuleLookup + ?Sized>(
    rules: &R,
    dirt: &DirtDegrees,
    grease: &GreaseDegrees,
) -> Activations {
    let mut output = Activations::zeroed();
    for (d_term, d_degree) in dirt.iter() {
        for (g_term, g_degree) in grease.iter() {
            match rules.consequent(d_term, g_term) {
                Some(consequent) => output.raise(consequent, d_degree.min(g_degree)),
                None => tracing::trace!(dirt = ?d_term, grease = ?g_term, "no rule for antecedent pair"),
            }
        }
    }
    output
}
