//! # fuzzy-wash
//!
//! Mamdani fuzzy controller for washing machines: a dirt reading (0–100) and a
//! grease reading (0–50) go in, a recommended wash time (0–60 minutes) comes
//! out.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! dirt ──► fuzzify ──┐
//!                    ├──► max-min rules ──► activations ──► centroid ──► minutes
//! grease ─► fuzzify ─┘
//!             ↑                 ↑                              ↑
//!        Variable/Triangle   RuleLookup                   Defuzzifier
//! ```
//!
//! Every stage is a pure function. The term shapes and the 15-entry rule table
//! are `const` data, and a [`WashController`] is immutable once built, so one
//! instance can serve any number of threads.
//!
//! ```rust
//! let minutes = fuzzy_wash::wash_time(30.0, 10.0);
//! assert!((minutes - 16.98).abs() < 0.01);
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`membership`] | [`Triangle`], [`ShapeKind`] | Triangular membership with explicit shoulder handling |
//! | [`vocabulary`] | [`LinguisticTerm`], [`Variable`], [`Degrees`] | Term sets, domains, fuzzification |
//! | [`terms`] | [`DirtTerm`], [`GreaseTerm`], [`WashTerm`], [`ShapeProfile`] | The washing-machine variables and shape tables |
//! | [`rules`] | [`RuleLookup`], [`StandardRules`], [`RuleBase`] | Rule tables and max-min inference |
//! | [`defuzzify`] | [`Defuzzifier`] | Sampled center-of-gravity |
//! | [`controller`] | [`WashController`], [`ControllerConfig`], [`Inference`] | The composed controller |
//! | [`error`] | [`FuzzyError`] | Construction-time errors |
//! | `explain` | `Explanation`, `FiredRule` | Fired-rule listing (requires `explain` feature) |
//! | `report` | `WashReport` | Serialisable evaluation record (requires `serde` feature) |
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default. Rule bases built at runtime use
//! `hashbrown`, which needs an allocator. Enable `std` for `std::error::Error`
//! integration and the console demo, `serde` for serialisation, `explain` for
//! the fired-rule listing and `python-ffi` for the PyO3 bindings.
//!
//! ## Logging
//!
//! The crate emits `tracing` events (trace level per evaluation, debug level
//! for construction and empty-output fallbacks). Install any subscriber to see
//! them; none is installed by the library.
//!
//! ## License
//!
//! Business Source License 1.1.

#![cfg_attr(not(any(feature = "std", feature = "python-ffi", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

pub mod error;
pub mod membership;
pub mod vocabulary;
pub mod terms;
pub mod rules;
pub mod defuzzify;
pub mod controller;
#[cfg(feature = "explain")]
pub mod explain;
#[cfg(feature = "serde")]
pub mod report;

#[cfg(feature = "python-ffi")]
pub mod ffi;

pub use controller::{ControllerConfig, Inference, WashController};
pub use defuzzify::Defuzzifier;
pub use error::FuzzyError;
pub use membership::{ShapeKind, Triangle};
pub use rules::{RuleBase, RuleLookup, StandardRules};
pub use terms::{DirtTerm, GreaseTerm, ShapeProfile, WashTerm};
pub use vocabulary::{Degrees, Domain, LinguisticTerm, Variable};

static DEFAULT_CONTROLLER: WashController = WashController::new();

/// Wash time in minutes for the given readings, using the default controller.
///
/// Equivalent to `WashController::new().compute(dirt, grease)`.
pub fn wash_time(dirt: f64, grease: f64) -> f64 {
    DEFAULT_CONTROLLER.compute(dirt, grease)
}
