//! Linguistic variables: the platform-independent fuzzification layer.
//!
//! A linguistic variable is a numeric axis ([`Domain`]) partitioned into an
//! ordered set of named terms, each carrying a [`Triangle`] shape. Fuzzifying
//! a crisp value produces a [`Degrees`] mapping: one membership degree per term.
//!
//! # Defining a term set
//!
//! ```rust
//! use fuzzy_wash::vocabulary::{Domain, LinguisticTerm, Variable};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Heat { Cold, Hot }
//!
//! impl LinguisticTerm<2> for Heat {
//!     const TERMS: [Self; 2] = [Heat::Cold, Heat::Hot];
//!     fn index(self) -> usize { self as usize }
//!     fn label(self) -> &'static str {
//!         match self { Heat::Cold => "cold", Heat::Hot => "hot" }
//!     }
//! }
//!
//! let heat: Variable<Heat, 2> = Variable::try_new(
//!     "heat",
//!     Domain::new(0.0, 100.0).unwrap(),
//!     [(0.0, 0.0, 100.0), (0.0, 100.0, 100.0)],
//! ).unwrap();
//! let degrees = heat.fuzzify(25.0);
//! assert!((degrees.get(Heat::Cold) - 0.75).abs() < 1e-12);
//! ```

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use crate::error::{FuzzyError, Result};
use crate::membership::Triangle;

/// An ordered set of linguistic terms.
///
/// `N` is the number of terms. `TERMS[i].index() == i` must hold for every
/// term; degree mappings are stored in that order.
pub trait LinguisticTerm<const N: usize>: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every term, in ascending order along the variable's axis.
    const TERMS: [Self; N];

    /// Position of this term in [`Self::TERMS`].
    fn index(self) -> usize;

    /// Short label, e.g. `"VSD"`.
    fn label(self) -> &'static str;
}

// ─── Domain ──────────────────────────────────────────────────────────────────

/// Nominal numeric range of a variable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Domain {
    /// Build a validated domain (`min < max`, both finite).
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !(min.is_finite() && max.is_finite()) || min >= max {
            return Err(FuzzyError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    /// Unchecked constructor for constant tables.
    pub const fn from_raw(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Apply the [`Domain::new`] checks to an existing domain.
    pub fn validate(&self) -> Result<()> {
        Self::new(self.min, self.max).map(|_| ())
    }

    /// Whether `x` lies inside the nominal range.
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// `max - min`.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

// ─── Degrees ─────────────────────────────────────────────────────────────────

/// Term → degree mapping for one variable.
///
/// Used both for fuzzified inputs and for aggregated output activations.
/// Every term is always present; absent membership is stored as 0.0.
#[derive(Clone, Copy, PartialEq)]
pub struct Degrees<T: LinguisticTerm<N>, const N: usize> {
    values: [f64; N],
    _term: PhantomData<T>,
}

impl<T: LinguisticTerm<N>, const N: usize> Degrees<T, N> {
    /// All degrees zero.
    pub const fn zeroed() -> Self {
        Self { values: [0.0; N], _term: PhantomData }
    }

    /// Wrap raw values given in term order.
    pub const fn from_array(values: [f64; N]) -> Self {
        Self { values, _term: PhantomData }
    }

    /// Degree of `term`.
    pub fn get(&self, term: T) -> f64 {
        self.values[term.index()]
    }

    /// Overwrite the degree of `term`.
    pub fn set(&mut self, term: T, degree: f64) {
        self.values[term.index()] = degree;
    }

    /// Raise `term` to `level` if that is higher than its current degree.
    ///
    /// Never lowers a degree; this is the max-aggregation step of inference.
    pub fn raise(&mut self, term: T, level: f64) {
        let slot = &mut self.values[term.index()];
        *slot = slot.max(level);
    }

    /// `(term, degree)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (T, f64)> + '_ {
        T::TERMS.into_iter().map(move |t| (t, self.values[t.index()]))
    }

    /// Term with the highest degree; the earliest term wins ties.
    ///
    /// Returns `None` when every degree is zero.
    pub fn peak(&self) -> Option<(T, f64)> {
        self.iter()
            .filter(|&(_, d)| d > 0.0)
            .fold(None, |best: Option<(T, f64)>, (t, d)| match best {
                Some((_, bd)) if bd >= d => best,
                _ => Some((t, d)),
            })
    }

    /// `true` when no term has positive membership.
    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&d| d <= 0.0)
    }

    /// Raw values in term order.
    pub fn as_array(&self) -> &[f64; N] {
        &self.values
    }
}

impl<T: LinguisticTerm<N>, const N: usize> Default for Degrees<T, N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: LinguisticTerm<N>, const N: usize> fmt::Debug for Degrees<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (t, d) in self.iter() {
            map.entry(&t.label(), &d);
        }
        map.finish()
    }
}

// ─── Variable ────────────────────────────────────────────────────────────────

/// A linguistic variable: name, domain and one shape per term.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variable<T: LinguisticTerm<N>, const N: usize> {
    /// Human-readable name, e.g. `"dirt"`.
    pub name: &'static str,
    /// Nominal range.
    pub domain: Domain,
    shapes: [Triangle; N],
    _term: PhantomData<T>,
}

impl<T: LinguisticTerm<N>, const N: usize> Variable<T, N> {
    /// Unchecked constructor for constant tables. Shapes are in term order.
    pub const fn from_raw(name: &'static str, domain: Domain, shapes: [Triangle; N]) -> Self {
        Self { name, domain, shapes, _term: PhantomData }
    }

    /// Build a variable from `(a, b, c)` tuples in term order, validating each.
    pub fn try_new(name: &'static str, domain: Domain, points: [(f64, f64, f64); N]) -> Result<Self> {
        domain.validate()?;
        let mut shapes = [Triangle::from_raw(0.0, 0.0, 0.0); N];
        for (slot, (a, b, c)) in shapes.iter_mut().zip(points) {
            *slot = Triangle::new(a, b, c)?;
        }
        Ok(Self::from_raw(name, domain, shapes))
    }

    /// Shape assigned to `term`.
    pub fn shape(&self, term: T) -> &Triangle {
        &self.shapes[term.index()]
    }

    /// Membership degree of `x` in `term`.
    pub fn membership(&self, term: T, x: f64) -> f64 {
        self.shape(term).degree(x)
    }

    /// Fuzzify a crisp value into one degree per term.
    ///
    /// No clamping: values outside the domain get whatever the shapes yield,
    /// which is 0 everywhere far enough outside.
    pub fn fuzzify(&self, x: f64) -> Degrees<T, N> {
        let mut degrees = Degrees::zeroed();
        for term in T::TERMS {
            degrees.set(term, self.membership(term, x));
        }
        degrees
    }
}
