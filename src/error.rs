//! Construction-time errors.
//!
//! The inference path itself never fails: an empty output set resolves to a
//! wash time of `0` and a missing rule is skipped. Errors only surface while
//! building custom shapes, domains or controllers.

use thiserror::Error;

/// Errors raised while building shapes, variables or controllers.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FuzzyError {
    /// Control points are out of order (`a ≤ b ≤ c` violated).
    #[error("triangle ({a}, {b}, {c}) must satisfy a <= b <= c")]
    InvalidShape {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },
    /// A control point is NaN or infinite.
    #[error("triangle ({a}, {b}, {c}) has a non-finite control point")]
    NonFiniteShape {
        /// Left foot.
        a: f64,
        /// Peak.
        b: f64,
        /// Right foot.
        c: f64,
    },
    /// Domain bounds are non-finite or not strictly increasing.
    #[error("domain [{min}, {max}] must be finite with min < max")]
    InvalidDomain {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// The defuzzifier was configured with zero samples.
    #[error("defuzzifier needs at least one sample point")]
    NoSamples,
}

/// Result alias for fallible construction APIs.
pub type Result<T> = core::result::Result<T, FuzzyError>;
