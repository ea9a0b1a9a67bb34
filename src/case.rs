//! Case descriptors: how many payload values a variant carries.
//!
//! Role
//! - Declare, per case, the payload shape the synthesized constructor will
//!   accept: nothing, a fixed constant, or one to three positional values.
//! - Provide the `Generic` placeholder token used by factory-built unions
//!   whose payload type is chosen at each constructor call.

use std::fmt;

use strum::{EnumDiscriminants, EnumIs};

use crate::value::Payload;

/// Payload shape of one case in a union.
///
/// Role
/// - `Empty` and `Const` cases build a memoized value: every constructor call
///   returns the same identity.
/// - `One`/`Two`/`Three` cases build a fresh value per call, carrying exactly
///   that many positional payloads.
#[derive(Clone, EnumIs, EnumDiscriminants)]
#[strum_discriminants(derive(PartialOrd, Ord, Hash))]
#[strum_discriminants(name(CaseShape))]
#[strum_discriminants(vis(pub))]
pub enum Case {
    // Memoized shapes
    Empty,
    Const(Payload),

    // Fresh-per-call shapes
    One,
    Two,
    Three,
}

impl Case {
    /// A case carrying no payload.
    #[inline]
    pub fn empty() -> Case {
        Case::Empty
    }

    /// A case carrying a constant fixed at declaration time.
    ///
    /// The constant's payload handle is shared by every value the case ever
    /// builds, including across generic instantiations of a factory union, so
    /// callers must not rely on per-instance copies.
    pub fn constant<T: 'static>(value: T) -> Case {
        Case::Const(Payload::new(value))
    }

    /// A case carrying one positional payload.
    #[inline]
    pub fn one() -> Case {
        Case::One
    }

    /// A case carrying two positional payloads.
    #[inline]
    pub fn two() -> Case {
        Case::Two
    }

    /// A case carrying three positional payloads.
    #[inline]
    pub fn three() -> Case {
        Case::Three
    }

    /// Number of payload slots a value of this case carries (0–3).
    pub fn payload_count(&self) -> usize {
        match self {
            Case::Empty => 0,
            Case::Const(_) | Case::One => 1,
            Case::Two => 2,
            Case::Three => 3,
        }
    }

    /// Whether this case carries at most one payload value.
    ///
    /// Joint matching over two unions is only defined when every case on both
    /// sides is single-data.
    #[inline]
    pub fn is_single_data(&self) -> bool {
        self.payload_count() <= 1
    }

    /// Whether the synthesized constructor memoizes its value.
    #[inline]
    pub fn is_memoized(&self) -> bool {
        matches!(self, Case::Empty | Case::Const(_))
    }

    /// Data-free shape tag of this case, usable as a map key or for ordering.
    #[inline]
    pub fn shape(&self) -> CaseShape {
        CaseShape::from(self)
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Empty => write!(f, "Empty"),
            Case::Const(_) => write!(f, "Const(..)"),
            Case::One => write!(f, "One"),
            Case::Two => write!(f, "Two"),
            Case::Three => write!(f, "Three"),
        }
    }
}

/// Placeholder token handed to the factory closure of [`Union::generic`].
///
/// Role
/// - Marks the case whose payload type is supplied by the caller of the
///   constructor rather than fixed by the registry. Payloads are dynamically
///   typed at runtime, so the token carries no data; it exists so a factory
///   table reads like any other declarative case table.
///
/// [`Union::generic`]: crate::union::Union::generic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generic;

impl From<Generic> for Case {
    fn from(_: Generic) -> Case {
        Case::One
    }
}
