//! Union registries and synthesized constructors.
//!
//! Role
//! - [`Union::new`] takes a declarative case table, validates it, and
//!   synthesizes one [`Ctor`] per case.
//! - [`Union::generic`] builds the table through a factory that receives the
//!   [`Generic`] placeholder, for unions whose payload type is chosen at each
//!   constructor call.
//!
//! Lifecycle
//! - A union is built once, typically at startup, and is read-only afterwards
//!   except for the one-time, idempotent memoization of payload-less and
//!   constant values.

use log::trace;
use once_cell::unsync::OnceCell;
use smallvec::smallvec;

use crate::case::{Case, Generic};
use crate::error::UnionError;
use crate::name::{CaseName, is_reserved};
use crate::value::{Payload, Slots, Value};

/// Argument tuples accepted by [`Ctor::call`]: `()`, `(a,)`, `(a, b)` or
/// `(a, b, c)`, each element becoming one payload slot in order.
pub trait CtorArgs: sealed::Sealed {
    #[doc(hidden)]
    fn into_slots(self) -> Slots;
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for () {}
    impl<A: 'static> Sealed for (A,) {}
    impl<A: 'static, B: 'static> Sealed for (A, B) {}
    impl<A: 'static, B: 'static, C: 'static> Sealed for (A, B, C) {}
}

impl CtorArgs for () {
    fn into_slots(self) -> Slots {
        Slots::new()
    }
}

impl<A: 'static> CtorArgs for (A,) {
    fn into_slots(self) -> Slots {
        smallvec![Payload::new(self.0)]
    }
}

impl<A: 'static, B: 'static> CtorArgs for (A, B) {
    fn into_slots(self) -> Slots {
        smallvec![Payload::new(self.0), Payload::new(self.1)]
    }
}

impl<A: 'static, B: 'static, C: 'static> CtorArgs for (A, B, C) {
    fn into_slots(self) -> Slots {
        smallvec![
            Payload::new(self.0),
            Payload::new(self.1),
            Payload::new(self.2),
        ]
    }
}

/// Synthesized constructor for one case of a union.
///
/// Role
/// - Builds [`Value`]s tagged with the case's name. Payload-less and constant
///   cases memoize their value on first call and hand out the same identity
///   forever after; payload-carrying cases allocate fresh on every call.
pub struct Ctor {
    name: CaseName,
    case: Case,
    memo: OnceCell<Value>,
}

impl Ctor {
    fn new(name: CaseName, case: Case) -> Ctor {
        Ctor {
            name,
            case,
            memo: OnceCell::new(),
        }
    }

    /// The case name this constructor stamps on its values.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared payload shape of this case.
    #[inline]
    pub fn case(&self) -> &Case {
        &self.case
    }

    /// Build a value.
    ///
    /// - `Empty` and `Const` cases ignore any supplied arguments and return
    ///   the memoized value.
    /// - `One`/`Two`/`Three` cases require exactly that many arguments.
    ///   A mismatched tuple width is a broken construction, not a recoverable
    ///   error, and panics rather than guess which slots to populate.
    pub fn call<A: CtorArgs>(&self, args: A) -> Value {
        match &self.case {
            Case::Empty => self
                .memo
                .get_or_init(|| Value::new(self.name.clone(), Slots::new()))
                .clone(),
            Case::Const(payload) => self
                .memo
                .get_or_init(|| Value::new(self.name.clone(), smallvec![payload.clone()]))
                .clone(),
            shape => {
                let slots = args.into_slots();
                let expected = shape.payload_count();
                assert!(
                    slots.len() == expected,
                    "case `{}` expects {} payload value(s), constructor called with {}",
                    self.name,
                    expected,
                    slots.len()
                );
                Value::new(self.name.clone(), slots)
            }
        }
    }
}

impl std::fmt::Debug for Ctor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ctor({} / {:?})", self.name, self.case)
    }
}

/// A closed set of named cases with one synthesized constructor each.
///
/// Role
/// - Ordered, immutable registry mapping case names to payload shapes.
/// - Dispatch surface: [`if_case`], [`match_value`]/[`matcher`] and
///   [`match_with`] live in [`crate::dispatch`].
///
/// [`if_case`]: Union::if_case
/// [`match_value`]: Union::match_value
/// [`matcher`]: Union::matcher
/// [`match_with`]: Union::match_with
#[derive(Debug)]
pub struct Union {
    ctors: Vec<Ctor>,
}

impl Union {
    /// Build a union from an ordered case table.
    ///
    /// Fails if a case name collides with the reserved dispatcher surface or
    /// appears twice; both are caller configuration errors caught here rather
    /// than left to misbehave at dispatch time.
    pub fn new<N, I>(cases: I) -> Result<Union, UnionError>
    where
        N: Into<CaseName>,
        I: IntoIterator<Item = (N, Case)>,
    {
        let mut ctors: Vec<Ctor> = Vec::new();
        for (name, case) in cases {
            let name: CaseName = name.into();
            if is_reserved(name.as_str()) {
                return Err(UnionError::ReservedCaseName {
                    name: name.as_str().to_string(),
                });
            }
            if ctors.iter().any(|c| c.name == name) {
                return Err(UnionError::DuplicateCaseName {
                    name: name.as_str().to_string(),
                });
            }
            ctors.push(Ctor::new(name, case));
        }
        trace!("union registered with {} case(s)", ctors.len());
        Ok(Union { ctors })
    }

    /// Build a union through a factory receiving the [`Generic`] placeholder.
    ///
    /// The token converts into a one-payload case descriptor, so a factory
    /// table reads like any other declarative case table:
    ///
    /// ```
    /// use tagcase::prelude::*;
    ///
    /// let maybe = Union::generic(|t| [("Nothing", Case::empty()), ("Just", t.into())])?;
    /// assert!(maybe.contains("Just"));
    /// # Ok::<(), UnionError>(())
    /// ```
    pub fn generic<F, N, I>(factory: F) -> Result<Union, UnionError>
    where
        F: FnOnce(Generic) -> I,
        N: Into<CaseName>,
        I: IntoIterator<Item = (N, Case)>,
    {
        Union::new(factory(Generic))
    }

    /// Number of cases in the registry.
    #[inline]
    pub fn len(&self) -> usize {
        self.ctors.len()
    }

    /// Whether the registry declares no cases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ctors.is_empty()
    }

    /// Whether a case with this name is registered.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.ctor(name).is_some()
    }

    /// Look up the synthesized constructor for a case.
    pub fn ctor(&self, name: &str) -> Option<&Ctor> {
        // Registries are small; a linear scan beats hashing short tag strings.
        self.ctors.iter().find(|c| c.name == *name)
    }

    /// Iterate the constructors in declaration order.
    pub fn ctors(&self) -> impl Iterator<Item = &Ctor> {
        self.ctors.iter()
    }

    /// Look up a constructor and call it in one step.
    ///
    /// Returns `None` for an unregistered case name.
    pub fn build<A: CtorArgs>(&self, name: &str, args: A) -> Option<Value> {
        Some(self.ctor(name)?.call(args))
    }
}
