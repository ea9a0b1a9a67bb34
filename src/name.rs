//! Case names: the string tags identifying variants within a union.
//!
//! Role
//! - Provide a cheap, shared identifier (`CaseName`) stamped on every value a
//!   constructor builds.
//! - Keep the reserved-name list in one place so registry construction can
//!   reject collisions with the dispatcher surface.

use std::fmt;
use std::rc::Rc;

/// Names that can never be used for a case: the dispatcher call surface
/// (`if`, `match`, `matchWith`), the phantom type-tag field `T`, and the
/// fallback-handler key `default`.
pub const RESERVED_NAMES: [&str; 5] = ["if", "match", "matchWith", "T", "default"];

/// Check whether a case name collides with the dispatcher surface.
#[inline]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Name of one case within a union.
///
/// Role
/// - Single-field newtype around a shared string. Cloning is a refcount bump,
///   so every value built from a case shares one allocation with its
///   constructor.
/// - Uniqueness within a registry is enforced at union construction, not here.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseName(Rc<str>);

impl CaseName {
    /// Borrow the underlying string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CaseName {
    fn from(s: &str) -> Self {
        CaseName(Rc::from(s))
    }
}

impl From<String> for CaseName {
    fn from(s: String) -> Self {
        CaseName(Rc::from(s.as_str()))
    }
}

impl PartialEq<str> for CaseName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for CaseName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CaseName({:?})", &*self.0)
    }
}
