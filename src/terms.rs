//! Washing-machine term sets and shape tables.
//!
//! Three linguistic variables drive the controller:
//!
//! | Variable | Domain | Terms |
//! |---|---|---|
//! | dirt | [0, 100] | VSD, SD, MD, HD, VHD |
//! | grease | [0, 50] | SG, MG, HG |
//! | wash time | [0, 60] min | VST, ST, MT, HT, VHT |
//!
//! # Shape profiles
//!
//! The reference dirt table gives "very high dirt" the shape `(751, 100, 100)`.
//! Its left foot lies outside the domain, so the term only reaches full
//! membership at exactly 100 and is 0 everywhere else. [`ShapeProfile::Reference`]
//! keeps that table so results agree with the reference computation.
//! [`ShapeProfile::Corrected`] uses `(75, 100, 100)`, which gives the term a
//! rising edge over the top quarter of the range.

use crate::membership::Triangle;
use crate::vocabulary::{Domain, LinguisticTerm, Variable};

// ─── Dirt ────────────────────────────────────────────────────────────────────

/// Dirt level terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DirtTerm {
    /// Very small dirt (VSD).
    VerySmall,
    /// Small dirt (SD).
    Small,
    /// Medium dirt (MD).
    Medium,
    /// High dirt (HD).
    High,
    /// Very high dirt (VHD).
    VeryHigh,
}

impl LinguisticTerm<5> for DirtTerm {
    const TERMS: [Self; 5] = [
        DirtTerm::VerySmall,
        DirtTerm::Small,
        DirtTerm::Medium,
        DirtTerm::High,
        DirtTerm::VeryHigh,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            DirtTerm::VerySmall => "VSD",
            DirtTerm::Small     => "SD",
            DirtTerm::Medium    => "MD",
            DirtTerm::High      => "HD",
            DirtTerm::VeryHigh  => "VHD",
        }
    }
}

// ─── Grease ──────────────────────────────────────────────────────────────────

/// Grease level terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GreaseTerm {
    /// Small grease (SG).
    Small,
    /// Medium grease (MG).
    Medium,
    /// High grease (HG).
    High,
}

impl LinguisticTerm<3> for GreaseTerm {
    const TERMS: [Self; 3] = [GreaseTerm::Small, GreaseTerm::Medium, GreaseTerm::High];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            GreaseTerm::Small  => "SG",
            GreaseTerm::Medium => "MG",
            GreaseTerm::High   => "HG",
        }
    }
}

// ─── Wash time ───────────────────────────────────────────────────────────────

/// Wash time (output) terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WashTerm {
    /// Very short time (VST).
    VeryShort,
    /// Short time (ST).
    Short,
    /// Medium time (MT).
    Medium,
    /// Long time (HT).
    Long,
    /// Very long time (VHT).
    VeryLong,
}

impl LinguisticTerm<5> for WashTerm {
    const TERMS: [Self; 5] = [
        WashTerm::VeryShort,
        WashTerm::Short,
        WashTerm::Medium,
        WashTerm::Long,
        WashTerm::VeryLong,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            WashTerm::VeryShort => "VST",
            WashTerm::Short     => "ST",
            WashTerm::Medium    => "MT",
            WashTerm::Long      => "HT",
            WashTerm::VeryLong  => "VHT",
        }
    }
}

// ─── Type aliases ────────────────────────────────────────────────────────────

/// Dirt variable type.
pub type DirtVariable = Variable<DirtTerm, 5>;
/// Grease variable type.
pub type GreaseVariable = Variable<GreaseTerm, 3>;
/// Wash time variable type.
pub type WashVariable = Variable<WashTerm, 5>;

// ─── Shape tables ────────────────────────────────────────────────────────────

/// Dirt variable with the reference shape table, including `(751, 100, 100)`.
pub const DIRT_REFERENCE: DirtVariable = Variable::from_raw(
    "dirt",
    Domain::from_raw(0.0, 100.0),
    [
        Triangle::from_raw(0.0, 0.0, 25.0),
        Triangle::from_raw(0.0, 25.0, 50.0),
        Triangle::from_raw(25.0, 50.0, 75.0),
        Triangle::from_raw(50.0, 75.0, 100.0),
        Triangle::from_raw(751.0, 100.0, 100.0),
    ],
);

/// Dirt variable with "very high dirt" rising from 75.
pub const DIRT_CORRECTED: DirtVariable = Variable::from_raw(
    "dirt",
    Domain::from_raw(0.0, 100.0),
    [
        Triangle::from_raw(0.0, 0.0, 25.0),
        Triangle::from_raw(0.0, 25.0, 50.0),
        Triangle::from_raw(25.0, 50.0, 75.0),
        Triangle::from_raw(50.0, 75.0, 100.0),
        Triangle::from_raw(75.0, 100.0, 100.0),
    ],
);

/// Grease variable.
pub const GREASE: GreaseVariable = Variable::from_raw(
    "grease",
    Domain::from_raw(0.0, 50.0),
    [
        Triangle::from_raw(0.0, 0.0, 25.0),
        Triangle::from_raw(0.0, 25.0, 50.0),
        Triangle::from_raw(25.0, 50.0, 50.0),
    ],
);

/// Wash time variable, in minutes.
pub const WASH_TIME: WashVariable = Variable::from_raw(
    "wash_time",
    Domain::from_raw(0.0, 60.0),
    [
        Triangle::from_raw(0.0, 0.0, 15.0),
        Triangle::from_raw(0.0, 15.0, 30.0),
        Triangle::from_raw(15.0, 30.0, 45.0),
        Triangle::from_raw(30.0, 45.0, 60.0),
        Triangle::from_raw(45.0, 60.0, 60.0),
    ],
);

/// Which dirt shape table to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeProfile {
    /// Reference table, "very high dirt" = `(751, 100, 100)`.
    #[default]
    Reference,
    /// "Very high dirt" = `(75, 100, 100)`.
    Corrected,
}

impl ShapeProfile {
    /// Dirt variable for this profile.
    pub fn dirt(self) -> DirtVariable {
        match self {
            ShapeProfile::Reference => DIRT_REFERENCE,
            ShapeProfile::Corrected => DIRT_CORRECTED,
        }
    }
}
