/*
 * This source code is licensed under the Business Source License 1.1.
 * See LICENSE in the root directory for full details.
 */

//! Triangular membership functions.
//!
//! A [`Triangle`] is described by three control points `(a, b, c)`: left foot,
//! peak and right foot. Its degree at `x` follows a fixed branch order:
//!
//! ```text
//! a < x < b   → (x − a) / (b − a)     rising edge
//! b ≤ x < c   → (c − x) / (c − b)     falling edge, peak included
//! x == b      → 1.0                   shoulder peaks
//! otherwise   → 0.0
//! ```
//!
//! # Shape categories
//!
//! | [`ShapeKind`] | Control points | Behaviour |
//! |---|---|---|
//! | `Triangle` | `a < b < c` | rising edge, peak, falling edge |
//! | `LeftShoulder` | `a == b < c` | 1.0 at `b`, falling edge to `c` |
//! | `RightShoulder` | `a < b == c` | rising edge from `a`, 1.0 at `b` |
//! | `Spike` | `a == b == c` | 1.0 at `b` only |
//!
//! An edge is evaluated only when its feet differ, so no category divides by
//! zero. Shoulders do not extend past their support: `x < a` and `x > c`
//! always yield 0.0.
//!
//! # Invariants
//!
//! - Degrees are in [0.0, 1.0] for every shape built through [`Triangle::new`].
//! - `degree(b) == 1.0` for every shape.
//! - No heap allocation, no unsafe code.

use crate::error::{FuzzyError, Result};

// ─── Shape category ──────────────────────────────────────────────────────────

/// Which edges a triangular shape has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// Interior triangle: both edges present (`a < b < c`).
    Triangle,
    /// Falling edge only; peak sits on the left foot (`a == b < c`).
    LeftShoulder,
    /// Rising edge only; peak sits on the right foot (`a < b == c`).
    RightShoulder,
    /// No edges; full membership at the peak alone (`a == b == c`).
    Spike,
}

// ─── Triangle ────────────────────────────────────────────────────────────────

/// Triangular membership function `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangle {
    /// Left foot.
    pub a: f64,
    /// Peak.
    pub b: f64,
    /// Right foot.
    pub c: f64,
}

impl Triangle {
    /// Build a validated triangle.
    ///
    /// Fails with [`FuzzyError::NonFiniteShape`] for NaN/infinite points and
    /// [`FuzzyError::InvalidShape`] unless `a ≤ b ≤ c`.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(FuzzyError::NonFiniteShape { a, b, c });
        }
        if a > b || b > c {
            return Err(FuzzyError::InvalidShape { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Build a triangle without validation.
    ///
    /// Used for the built-in constant tables. Out-of-order points are still
    /// evaluated safely: an edge whose feet are reversed is simply never taken.
    pub const fn from_raw(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Shape category, derived from which edges exist.
    pub fn kind(&self) -> ShapeKind {
        match (self.has_rising_edge(), self.has_falling_edge()) {
            (true, true) => ShapeKind::Triangle,
            (false, true) => ShapeKind::LeftShoulder,
            (true, false) => ShapeKind::RightShoulder,
            (false, false) => ShapeKind::Spike,
        }
    }

    /// Membership degree of `x` in this shape.
    pub fn degree(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;
        if self.has_rising_edge() && a < x && x < b {
            (x - a) / (b - a)
        } else if self.has_falling_edge() && b <= x && x < c {
            (c - x) / (c - b)
        } else if x == b {
            1.0
        } else {
            0.0
        }
    }

    /// The point of full membership.
    pub fn peak(&self) -> f64 {
        self.b
    }

    /// Closed interval `[a, c]` outside which the degree is always 0.
    pub fn support(&self) -> (f64, f64) {
        (self.a, self.c)
    }

    /// Centroid of the full (unclipped) triangle: `(a + b + c) / 3`.
    ///
    /// Only meaningful for validated shapes. The discretised defuzzifier
    /// converges to this value for a single fully-active term.
    pub fn centroid(&self) -> f64 {
        (self.a + self.b + self.c) / 3.0
    }

    #[inline]
    fn has_rising_edge(&self) -> bool {
        self.a < self.b
    }

    #[inline]
    fn has_falling_edge(&self) -> bool {
        self.b < self.c
    }
}

/// Evaluate the triangular membership `(a, b, c)` at `x`.
///
/// Equivalent to `Triangle::from_raw(a, b, c).degree(x)`.
pub fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    Triangle::from_raw(a, b, c).degree(x)
}

// ─── Tests ──────────────────────────────────────────────────────────────────
