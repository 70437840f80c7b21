//! Serialisable record of one controller evaluation.
//!
//! Requires the `serde` feature. Degrees are stored by label rather than as
//! fixed arrays so the record reads naturally as JSON:
//!
//! ```text
//! {
//!   "version": 1,
//!   "dirt_level": 30.0,
//!   "grease_level": 10.0,
//!   "dirt":        [{"label": "VSD", "degree": 0.0}, ...],
//!   "grease":      [{"label": "SG",  "degree": 0.6}, ...],
//!   "activations": [{"label": "VST", "degree": 0.6}, ...],
//!   "wash_time": 16.98
//! }
//! ```
//!
//! Uses `alloc` only; compatible with `no_std + alloc`.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::controller::Inference;
use crate::vocabulary::{Degrees, LinguisticTerm};

/// Current report format version.
pub const REPORT_VERSION: u16 = 1;

/// A labelled membership degree or activation level.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TermDegree {
    /// Term label, e.g. `"MD"`.
    pub label: String,
    /// Degree in [0.0, 1.0].
    pub degree: f64,
}

/// Snapshot of one evaluation.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct WashReport {
    /// Format version; [`REPORT_VERSION`] for new reports.
    pub version: u16,
    /// Crisp dirt input.
    pub dirt_level: f64,
    /// Crisp grease input.
    pub grease_level: f64,
    /// Dirt degrees in term order.
    pub dirt: Vec<TermDegree>,
    /// Grease degrees in term order.
    pub grease: Vec<TermDegree>,
    /// Output activations in term order.
    pub activations: Vec<TermDegree>,
    /// Crisp wash time in minutes.
    pub wash_time: f64,
}

fn labelled<T: LinguisticTerm<N>, const N: usize>(degrees: &Degrees<T, N>) -> Vec<TermDegree> {
    degrees
        .iter()
        .map(|(term, degree)| TermDegree { label: term.label().to_string(), degree })
        .collect()
}

impl From<&Inference> for WashReport {
    fn from(inf: &Inference) -> Self {
        Self::from_inference(inf)
    }
}

impl WashReport {
    /// Build a report from an evaluation.
    pub fn from_inference(inf: &Inference) -> Self {
        Self {
            version: REPORT_VERSION,
            dirt_level: inf.dirt_level,
            grease_level: inf.grease_level,
            dirt: labelled(&inf.dirt),
            grease: labelled(&inf.grease),
            activations: labelled(&inf.activations),
            wash_time: inf.wash_time,
        }
    }

    /// Output term with the highest activation; `None` if nothing fired.
    pub fn dominant_term(&self) -> Option<&TermDegree> {
        self.activations
            .iter()
            .filter(|t| t.degree > 0.0)
            .fold(None, |best: Option<&TermDegree>, t| match best {
                Some(b) if b.degree >= t.degree => best,
                _ => Some(t),
            })
    }

    /// Activation level recorded for `label`.
    pub fn activation(&self, label: &str) -> Option<f64> {
        self.activations.iter().find(|t| t.label == label).map(|t| t.degree)
    }
}
