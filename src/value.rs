//! Runtime values: the uniform tag-plus-slots encoding of a constructed case.
//!
//! Role
//! - [`Payload`] is a shared, dynamically typed handle to one payload value.
//! - [`Value`] is the immutable record a constructor builds: the case's tag
//!   and up to three positional payload slots.
//! - [`Unpacked`] decodes a value's slots positionally for handler dispatch,
//!   the way a match arm would destructure a native enum variant.
//!
//! Identity semantics
//! - Values and payloads compare by reference identity ([`Value::same`],
//!   [`Payload::same`]), never structurally: payload-less and constant cases
//!   memoize one instance, payload-carrying cases allocate a fresh one per
//!   constructor call even for identical arguments.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;
use strum::EnumIs;

use crate::name::CaseName;

/// Maximum number of payload slots a case can declare.
pub const MAX_ARITY: usize = 3;

/// Inline storage for a value's payload slots.
///
/// A slot exists iff the constructor received the corresponding argument, so
/// the populated-slot count *is* the arity; no sentinel inspection is ever
/// needed, even when a payload itself is `()` or an `Option::None`.
pub type Slots = SmallVec<[Payload; MAX_ARITY]>;

/// Shared, dynamically typed payload handle.
///
/// Role
/// - Wraps one payload value behind `Rc<dyn Any>`; cloning bumps a refcount.
/// - Typed read access via [`Payload::downcast_ref`]; identity comparison via
///   [`Payload::same`].
#[derive(Clone)]
pub struct Payload(Rc<dyn Any>);

impl Payload {
    /// Wrap a payload value.
    pub fn new<T: 'static>(value: T) -> Payload {
        Payload(Rc::new(value))
    }

    /// Whether the payload holds a `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.0.is::<T>()
    }

    /// Borrow the payload as a `T`, if that is what it holds.
    #[inline]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Reference identity: do both handles point at the same allocation?
    #[inline]
    pub fn same(a: &Payload, b: &Payload) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Payload(..)")
    }
}

/// One constructed instance of a union case.
///
/// Role
/// - Carries the tag naming the case it was built from plus its payload
///   slots. Immutable once constructed; cloning shares the same instance.
///
/// Equality semantics
/// - No `PartialEq`: the contract is reference identity, exposed as
///   [`Value::same`]. Two memoized-constructor calls yield `same` values; two
///   payload-constructor calls never do, even with identical arguments.
#[derive(Clone)]
pub struct Value(Rc<ValueRepr>);

struct ValueRepr {
    tag: CaseName,
    slots: Slots,
}

impl Value {
    pub(crate) fn new(tag: CaseName, slots: Slots) -> Value {
        debug_assert!(
            slots.len() <= MAX_ARITY,
            "value for case `{}` built with {} payload slots",
            tag,
            slots.len()
        );
        Value(Rc::new(ValueRepr { tag, slots }))
    }

    /// The name of the case this value was built from.
    #[inline]
    pub fn tag(&self) -> &str {
        self.0.tag.as_str()
    }

    /// Number of populated payload slots (0–3).
    #[inline]
    pub fn arity(&self) -> usize {
        self.0.slots.len()
    }

    /// Whether this value was built from the named case.
    #[inline]
    pub fn is_case(&self, name: &str) -> bool {
        self.tag() == name
    }

    /// Borrow the payload in slot `idx`, if populated.
    #[inline]
    pub fn payload(&self, idx: usize) -> Option<&Payload> {
        self.0.slots.get(idx)
    }

    /// Decode the slots into a positional [`Unpacked`] view.
    #[inline]
    pub fn view(&self) -> Unpacked<'_> {
        Unpacked::from_slots(self.tag(), &self.0.slots)
    }

    /// Reference identity: are both handles the same constructed instance?
    #[inline]
    pub fn same(a: &Value, b: &Value) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({} / {} payload(s))", self.0.tag, self.arity())
    }
}

/// Positional view of a value's payload slots.
///
/// Role
/// - Spreads a value's payloads for handler invocation: a handler for a
///   two-payload case matches `Unpacked::Two(a, b)` and receives the slots in
///   declaration order.
/// - Borrowed from the value; cheap to copy and pass to closures.
#[derive(Clone, Copy, EnumIs)]
pub enum Unpacked<'a> {
    Empty,
    One(&'a Payload),
    Two(&'a Payload, &'a Payload),
    Three(&'a Payload, &'a Payload, &'a Payload),
}

impl<'a> Unpacked<'a> {
    /// Decode a slot slice positionally.
    ///
    /// A slot count above [`MAX_ARITY`] means the value was constructed
    /// through means other than a synthesized constructor; there is no
    /// handler arity to guess, so this aborts rather than pick one.
    pub(crate) fn from_slots(tag: &str, slots: &'a [Payload]) -> Unpacked<'a> {
        match slots {
            [] => Unpacked::Empty,
            [a] => Unpacked::One(a),
            [a, b] => Unpacked::Two(a, b),
            [a, b, c] => Unpacked::Three(a, b, c),
            _ => panic!(
                "value for case `{}` carries {} payload slots, expected at most {}",
                tag,
                slots.len(),
                MAX_ARITY
            ),
        }
    }

    /// Number of payloads in the view (0–3).
    pub fn arity(&self) -> usize {
        match self {
            Unpacked::Empty => 0,
            Unpacked::One(..) => 1,
            Unpacked::Two(..) => 2,
            Unpacked::Three(..) => 3,
        }
    }

    /// Payload at position `idx`, if the view has one.
    pub fn slot(&self, idx: usize) -> Option<&'a Payload> {
        match (*self, idx) {
            (Unpacked::One(a), 0)
            | (Unpacked::Two(a, _), 0)
            | (Unpacked::Three(a, _, _), 0) => Some(a),
            (Unpacked::Two(_, b), 1) | (Unpacked::Three(_, b, _), 1) => Some(b),
            (Unpacked::Three(_, _, c), 2) => Some(c),
            _ => None,
        }
    }

    /// Typed payload at position `idx`: slot lookup plus downcast.
    #[inline]
    pub fn get<T: 'static>(&self, idx: usize) -> Option<&'a T> {
        self.slot(idx)?.downcast_ref::<T>()
    }
}

impl fmt::Debug for Unpacked<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unpacked({} payload(s))", self.arity())
    }
}
