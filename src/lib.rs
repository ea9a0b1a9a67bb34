//! Tagcase: runtime tagged unions built from declarative case tables.
//!
//! A [`Union`](union::Union) is a closed set of named cases, each declaring
//! how many payload values it carries (none, a fixed constant, or one to
//! three positional values). Building the union synthesizes one constructor
//! per case; constructed [`Value`](value::Value)s are immutable tag-plus-slots
//! records that flow into the dispatch surface:
//!
//! - single-case unpack ([`Union::if_case`](union::Union::if_case) /
//!   [`if_case_else`](union::Union::if_case_else)),
//! - total match with optional default
//!   ([`Union::match_value`](union::Union::match_value) /
//!   [`matcher`](union::Union::matcher)),
//! - joint two-union match for transition tables
//!   ([`Union::match_with`](union::Union::match_with)).
//!
//! Identity semantics
//! - Payload-less and constant cases memoize their value: every constructor
//!   call returns the same identity. Payload-carrying cases allocate fresh on
//!   every call, even for identical arguments.
//!
//! Example
//! ```
//! use tagcase::prelude::*;
//!
//! let shape = Union::new([
//!     ("Point", Case::empty()),
//!     ("Circle", Case::one()),
//!     ("Rect", Case::two()),
//! ])?;
//!
//! let circle = shape.build("Circle", (2.0f64,)).unwrap();
//!
//! // Single-case unpack: absent on a tag mismatch.
//! let radius = shape.if_case("Circle", &circle, |v| *v.get::<f64>(0).unwrap());
//! assert_eq!(radius, Some(2.0));
//! assert_eq!(shape.if_case("Point", &circle, |_| ()), None);
//!
//! // Total match with a default branch.
//! let area = Cases::new()
//!     .on("Circle", |v| v.get::<f64>(0).unwrap().powi(2) * std::f64::consts::PI)
//!     .on("Rect", |v| v.get::<f64>(0).unwrap() * v.get::<f64>(1).unwrap())
//!     .default(|_| 0.0);
//! assert!(shape.match_value(&circle, &area).unwrap() > 12.0);
//! # Ok::<(), UnionError>(())
//! ```
//!
//! A union whose payload type is chosen per constructor call is built through
//! a factory receiving the [`Generic`](case::Generic) placeholder:
//!
//! ```
//! use tagcase::prelude::*;
//!
//! let maybe = Union::generic(|t| [("Nothing", Case::empty()), ("Just", t.into())])?;
//! let five = maybe.build("Just", (5i32,)).unwrap();
//! let next = maybe.if_case("Just", &five, |v| v.get::<i32>(0).unwrap() + 1);
//! assert_eq!(next, Some(6));
//! # Ok::<(), UnionError>(())
//! ```

/// Case descriptors and the generic payload placeholder.
pub mod case;
/// Dispatch surface: unpack, total match, and the two-union joint match.
pub mod dispatch;
/// Registry and joint-matcher construction errors.
pub mod error;
/// Case names and the reserved dispatcher-surface names.
pub mod name;
/// Union registries and synthesized constructors.
pub mod union;
/// Values, payload handles, and the positional unpack view.
pub mod value;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::case::{Case, CaseShape, Generic};
    pub use crate::dispatch::joint::{JointCases, JointMatcher};
    pub use crate::dispatch::{Cases, Matcher};
    pub use crate::error::UnionError;
    pub use crate::name::CaseName;
    pub use crate::union::{Ctor, CtorArgs, Union};
    pub use crate::value::{Payload, Unpacked, Value};
}
