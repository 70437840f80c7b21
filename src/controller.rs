/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! The wash-time controller: fuzzify → infer → defuzzify.
//!
//! A [`WashController`] owns three variables, a rule source and a
//! [`Defuzzifier`]. It is immutable once built, so a single instance can be
//! shared across threads and called concurrently.
//!
//! ```rust
//! use fuzzy_wash::controller::WashController;
//!
//! let controller = WashController::new();
//! let minutes = controller.compute(0.0, 0.0);
//! assert!((minutes - 5.0).abs() < 0.05);
//! ```

use crate::defuzzify::{Defuzzifier, DEFAULT_SAMPLES, FALLBACK_OUTPUT};
use crate::error::Result;
use crate::rules::{infer, Activations, DirtDegrees, GreaseDegrees, RuleLookup, StandardRules};
use crate::terms::{
    DirtVariable, GreaseVariable, ShapeProfile, WashVariable, DIRT_REFERENCE, GREASE, WASH_TIME,
};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Controller settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerConfig {
    /// Defuzzifier sample count. Default 1000.
    pub samples: usize,
    /// Dirt shape table. Default [`ShapeProfile::Reference`].
    pub profile: ShapeProfile,
}

impl ControllerConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the configuration without building a controller.
    pub fn validate(&self) -> Result<()> {
        Defuzzifier::with_samples(self.samples).map(|_| ())
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            profile: ShapeProfile::default(),
        }
    }
}

// ─── Inference result ────────────────────────────────────────────────────────

/// Everything one evaluation produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inference {
    /// Crisp dirt input.
    pub dirt_level: f64,
    /// Crisp grease input.
    pub grease_level: f64,
    /// Fuzzified dirt.
    pub dirt: DirtDegrees,
    /// Fuzzified grease.
    pub grease: GreaseDegrees,
    /// Aggregated output activations.
    pub activations: Activations,
    /// Crisp wash time in minutes.
    pub wash_time: f64,
    /// `true` when the output envelope was zero at every sample point and
    /// `wash_time` is the fallback value.
    pub fallback: bool,
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// Mamdani controller mapping (dirt, grease) to a wash time.
#[derive(Clone, Debug)]
pub struct WashController<R: RuleLookup = StandardRules> {
    dirt: DirtVariable,
    grease: GreaseVariable,
    wash: WashVariable,
    rules: R,
    defuzzifier: Defuzzifier,
}

impl WashController<StandardRules> {
    /// Controller with the standard tables and default configuration.
    ///
    /// Usable in `const` and `static` items.
    pub const fn new() -> Self {
        Self {
            dirt: DIRT_REFERENCE,
            grease: GREASE,
            wash: WASH_TIME,
            rules: StandardRules,
            defuzzifier: Defuzzifier { samples: DEFAULT_SAMPLES },
        }
    }

    /// Controller with the standard rule table and `config`.
    pub fn with_config(config: ControllerConfig) -> Result<Self> {
        Self::with_rules(config, StandardRules)
    }
}

impl Default for WashController<StandardRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RuleLookup> WashController<R> {
    /// Controller with the standard variables, `config` and a custom rule source.
    pub fn with_rules(config: ControllerConfig, rules: R) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, rules))
    }

    /// Controller from fully custom parts.
    pub fn from_parts(
        dirt: DirtVariable,
        grease: GreaseVariable,
        wash: WashVariable,
        rules: R,
        samples: usize,
    ) -> Result<Self> {
        dirt.domain.validate()?;
        grease.domain.validate()?;
        wash.domain.validate()?;
        let defuzzifier = Defuzzifier::with_samples(samples)?;
        tracing::debug!(samples, "wash controller built from custom parts");
        Ok(Self { dirt, grease, wash, rules, defuzzifier })
    }

    fn build(config: ControllerConfig, rules: R) -> Self {
        tracing::debug!(samples = config.samples, profile = ?config.profile, "wash controller built");
        Self {
            dirt: config.profile.dirt(),
            grease: GREASE,
            wash: WASH_TIME,
            rules,
            defuzzifier: Defuzzifier { samples: config.samples },
        }
    }

    /// Recommended wash time in minutes for the given readings.
    ///
    /// Inputs are not clamped. Returns 0 when no rule fires.
    pub fn compute(&self, dirt: f64, grease: f64) -> f64 {
        self.evaluate(dirt, grease).wash_time
    }

    /// Run the full pipeline and keep every intermediate result.
    pub fn evaluate(&self, dirt_level: f64, grease_level: f64) -> Inference {
        let dirt = self.dirt.fuzzify(dirt_level);
        let grease = self.grease.fuzzify(grease_level);
        let activations = self.activations(&dirt, &grease);
        let centroid = self.defuzzifier.centroid_checked(&activations, &self.wash);
        let fallback = centroid.is_none();
        let wash_time = centroid.unwrap_or(FALLBACK_OUTPUT);
        tracing::trace!(dirt_level, grease_level, wash_time, fallback, "wash time computed");
        Inference { dirt_level, grease_level, dirt, grease, activations, wash_time, fallback }
    }

    /// Rule evaluation stage on its own.
    pub fn activations(&self, dirt: &DirtDegrees, grease: &GreaseDegrees) -> Activations {
        infer(&self.rules, dirt, grease)
    }

    /// Dirt variable in use.
    pub fn dirt_variable(&self) -> &DirtVariable {
        &self.dirt
    }

    /// Grease variable in use.
    pub fn grease_variable(&self) -> &GreaseVariable {
        &self.grease
    }

    /// Wash time variable in use.
    pub fn wash_variable(&self) -> &WashVariable {
        &self.wash
    }

    /// Rule source in use.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Defuzzifier in use.
    pub fn defuzzifier(&self) -> &Defuzzifier {
        &self.defuzzifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FuzzyError;
    use crate::membership::Triangle;
    use crate::rules::RuleBase;
    use crate::terms::{DirtTerm, GreaseTerm, WashTerm, DIRT_CORRECTED};
    use crate::vocabulary::{Domain, Variable};

    fn assert_near(got: f64, expected: f64, tol: f64) {
        assert!((got - expected).abs() < tol, "got {}, expected {} ± {}", got, expected, tol);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = ControllerConfig::default();
        assert_eq!(cfg.samples, 1000);
        assert_eq!(cfg.profile, ShapeProfile::Reference);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            ControllerConfig { samples: 0, ..ControllerConfig::default() }.validate(),
            Err(FuzzyError::NoSamples)
        );
    }

    #[test]
    fn test_with_config_rejects_zero_samples() {
        let cfg = ControllerConfig { samples: 0, ..ControllerConfig::new() };
        assert_eq!(WashController::with_config(cfg).unwrap_err(), FuzzyError::NoSamples);
    }

    #[test]
    fn test_clean_load_is_shortest_wash() {
        let c = WashController::new();
        assert_near(c.compute(0.0, 0.0), 5.0, 0.05);
        assert_near(c.compute(0.0, 0.0), 4.980009950069836, 1e-9);
    }

    #[test]
    fn test_peak_inputs_fire_single_medium_rule() {
        let inf = WashController::new().evaluate(50.0, 25.0);
        assert_eq!(inf.dirt.get(DirtTerm::Medium), 1.0);
        assert_eq!(inf.grease.get(GreaseTerm::Medium), 1.0);
        assert_eq!(inf.activations.as_array(), &[0.0, 0.0, 1.0, 0.0, 0.0]);
        assert_near(inf.wash_time, 30.0, 1e-9);
    }

    #[test]
    fn test_far_out_of_range_falls_back_to_zero() {
        let c = WashController::new();
        assert_eq!(c.compute(-100.0, 0.0), 0.0);
        assert_eq!(c.compute(0.0, -100.0), 0.0);
        assert_eq!(c.compute(500.0, 500.0), 0.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let c = WashController::new();
        let a = c.evaluate(63.2, 17.9);
        let b = c.evaluate(63.2, 17.9);
        assert_eq!(a, b);
        assert_eq!(a.wash_time.to_bits(), b.wash_time.to_bits());
    }

    #[test]
    fn test_corrected_profile_changes_high_dirt_only() {
        let reference = WashController::new();
        let corrected = WashController::with_config(ControllerConfig {
            profile: ShapeProfile::Corrected,
            ..ControllerConfig::default()
        })
        .unwrap();
        assert_eq!(corrected.dirt_variable(), &DIRT_CORRECTED);
        assert_eq!(reference.compute(30.0, 10.0), corrected.compute(30.0, 10.0));
        assert_near(reference.compute(90.0, 5.0), 34.99998996993019, 1e-9);
        assert_near(corrected.compute(90.0, 5.0), 39.038402093383596, 1e-9);
    }

    #[test]
    fn test_custom_rule_base_controller() {
        let rules = RuleBase::standard().with_rule(DirtTerm::VerySmall, GreaseTerm::Small, WashTerm::Medium);
        let c = WashController::with_rules(ControllerConfig::default(), rules).unwrap();
        // (VSD, SG) now fires MT alone.
        assert_near(c.compute(0.0, 0.0), 30.0, 1e-9);
        assert_eq!(c.rules().len(), 15);
    }

    #[test]
    fn test_from_parts_uses_given_sample_count() {
        let c = WashController::from_parts(DIRT_CORRECTED, GREASE, WASH_TIME, StandardRules, 100_000).unwrap();
        assert_eq!(c.defuzzifier().samples, 100_000);
        assert_near(c.compute(0.0, 0.0), 5.0, 1e-3);
        assert!(WashController::from_parts(DIRT_CORRECTED, GREASE, WASH_TIME, StandardRules, 0).is_err());
    }

    #[test]
    fn test_from_parts_rejects_reversed_domain() {
        let backwards: WashVariable = Variable::from_raw(
            WASH_TIME.name,
            Domain::from_raw(60.0, 0.0),
            [
                *WASH_TIME.shape(WashTerm::VeryShort),
                *WASH_TIME.shape(WashTerm::Short),
                *WASH_TIME.shape(WashTerm::Medium),
                *WASH_TIME.shape(WashTerm::Long),
                *WASH_TIME.shape(WashTerm::VeryLong),
            ],
        );
        let err = WashController::from_parts(DIRT_REFERENCE, GREASE, backwards, StandardRules, 1000).unwrap_err();
        assert_eq!(err, FuzzyError::InvalidDomain { min: 60.0, max: 0.0 });
    }

    #[test]
    fn test_fallback_flag_follows_defuzzifier() {
        let c = WashController::new();
        assert!(!c.evaluate(30.0, 10.0).fallback);
        assert!(c.evaluate(-100.0, 0.0).fallback);

        // VST narrowed to a spike between sample points: the rule fires but
        // the output envelope stays zero.
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
        let inf = c.evaluate(0.0, 0.0);
        assert_eq!(inf.activations.get(WashTerm::VeryShort), 1.0);
        assert!(inf.fallback);
        assert_eq!(inf.wash_time, 0.0);
    }

    #[test]
    fn test_new_is_const() {
        const DEFAULT: WashController = WashController::new();
        let built = WashController::with_config(ControllerConfig::default()).unwrap();
        assert_eq!(DEFAULT.dirt_variable(), built.dirt_variable());
        assert_eq!(DEFAULT.defuzzifier(), built.defuzzifier());
        assert_eq!(DEFAULT.compute(60.0, 35.0).to_bits(), built.compute(60.0, 35.0).to_bits());
    }

    #[test]
    fn test_controller_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WashController>();
        assert_send_sync::<WashController<RuleBase>>();
    }
}
