/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Center-of-gravity defuzzification over a sampled output domain.
//!
//! The aggregated output set is never stored. At each sample point `x` its
//! envelope is rebuilt from the per-term activations:
//!
//! ```text
//! envelope(x) = max_t  min(μ_t(x), activation_t)
//! centroid    = Σ x · envelope(x) / Σ envelope(x)
//! ```
//!
//! Samples are `samples` evenly spaced points over the domain, both endpoints
//! included, visited low to high. When the envelope is zero at every sample
//! the centroid falls back to 0.

use crate::error::{FuzzyError, Result};
use crate::vocabulary::{Degrees, Domain, LinguisticTerm, Variable};

/// Sample count used unless configured otherwise.
pub const DEFAULT_SAMPLES: usize = 1000;

/// Wash time returned when no output term is active.
pub const FALLBACK_OUTPUT: f64 = 0.0;

/// Discretised centroid defuzzifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defuzzifier {
    /// Number of sample points across the output domain.
    pub samples: usize,
}

impl Defuzzifier {
    /// Defuzzifier with [`DEFAULT_SAMPLES`] sample points.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defuzzifier with `samples` sample points. Zero is rejected.
    pub fn with_samples(samples: usize) -> Result<Self> {
        if samples == 0 {
            return Err(FuzzyError::NoSamples);
        }
        Ok(Self { samples })
    }

    /// The `i`-th sample point over `domain`.
    ///
    /// The last point is pinned to `domain.max` so rounding in the step never
    /// moves the upper endpoint.
    pub fn sample_point(&self, domain: &Domain, i: usize) -> f64 {
        if self.samples <= 1 {
            return domain.min;
        }
        if i + 1 == self.samples {
            return domain.max;
        }
        let step = domain.width() / (self.samples - 1) as f64;
        domain.min + i as f64 * step
    }

    /// All sample points over `domain`, low to high.
    pub fn sample_points<'a>(&'a self, domain: &'a Domain) -> impl Iterator<Item = f64> + 'a {
        (0..self.samples).map(move |i| self.sample_point(domain, i))
    }

    /// Aggregated output membership at `x`.
    pub fn envelope<T: LinguisticTerm<N>, const N: usize>(
        activations: &Degrees<T, N>,
        output: &Variable<T, N>,
        x: f64,
    ) -> f64 {
        activations
            .iter()
            .map(|(term, level)| output.membership(term, x).min(level))
            .fold(0.0, f64::max)
    }

    /// Crisp value of the aggregated output set, or [`FALLBACK_OUTPUT`].
    pub fn centroid<T: LinguisticTerm<N>, const N: usize>(
        &self,
        activations: &Degrees<T, N>,
        output: &Variable<T, N>,
    ) -> f64 {
        self.centroid_checked(activations, output).unwrap_or(FALLBACK_OUTPUT)
    }

    /// Crisp value of the aggregated output set.
    ///
    /// `None` when the envelope is zero at every sample point. That covers
    /// no active term as well as active terms whose shapes fall between
    /// sample points.
    pub fn centroid_checked<T: LinguisticTerm<N>, const N: usize>(
        &self,
        activations: &Degrees<T, N>,
        output: &Variable<T, N>,
    ) -> Option<f64> {
        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for x in self.sample_points(&output.domain) {
            let mu = Self::envelope(activations, output, x);
            numerator += x * mu;
            denominator += mu;
        }
        if denominator == 0.0 {
            tracing::debug!(samples = self.samples, "empty output set, using fallback");
            return None;
        }
        Some(numerator / denominator)
    }
}

impl Default for Defuzzifier {
    fn default() -> Self {
        Self { samples: DEFAULT_SAMPLES }
    }
}
