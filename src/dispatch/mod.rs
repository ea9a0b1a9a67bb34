//! Dispatch surface: single-case unpack and total match.
//!
//! Role
//! - [`Union::if_case`] / [`Union::if_case_else`] test one specific case and
//!   hand the payloads to a closure when the tag matches.
//! - [`Cases`] is a caller-built case table; [`Union::match_value`] applies it
//!   to one value immediately, [`Union::matcher`] captures it once into a
//!   reusable [`Matcher`] for hot loops. Both forms share one evaluation path
//!   and therefore identical semantics.
//!
//! Absence
//! - An unmatched value with no `default` handler resolves to `None`. That is
//!   a normal, silent outcome: exhaustiveness is the caller's contract
//!   (handle every case, or supply `default`), not a runtime check.

pub mod joint;

use crate::name::CaseName;
use crate::union::Union;
use crate::value::{Unpacked, Value};

/// Handler table for a total match over one union.
///
/// Role
/// - Maps case names to handlers receiving the value's payloads positionally,
///   plus an optional `default` receiving the original value.
/// - Borrow-friendly: handlers may capture environment for the lifetime `'a`.
///
/// Either every declared case gets an arm (no `default`), or `default` is
/// present and individual arms become optional. The contract is advisory and
/// not validated at runtime: a table with neither simply yields `None`.
pub struct Cases<'a, R> {
    arms: Vec<(CaseName, Box<dyn Fn(Unpacked<'_>) -> R + 'a>)>,
    default: Option<Box<dyn Fn(&Value) -> R + 'a>>,
}

impl<'a, R> Cases<'a, R> {
    /// An empty table.
    pub fn new() -> Cases<'a, R> {
        Cases {
            arms: Vec::new(),
            default: None,
        }
    }

    /// Register the handler for one case.
    ///
    /// Registering the same case twice replaces the earlier arm, so the last
    /// registration wins.
    pub fn on<N, F>(mut self, name: N, handler: F) -> Cases<'a, R>
    where
        N: Into<CaseName>,
        F: Fn(Unpacked<'_>) -> R + 'a,
    {
        let name: CaseName = name.into();
        let handler: Box<dyn Fn(Unpacked<'_>) -> R + 'a> = Box::new(handler);
        match self.arms.iter().position(|(n, _)| *n == name) {
            Some(idx) => self.arms[idx].1 = handler,
            None => self.arms.push((name, handler)),
        }
        self
    }

    /// Register the fallback handler, invoked with the original value when no
    /// arm matches its tag.
    pub fn default<F>(mut self, handler: F) -> Cases<'a, R>
    where
        F: Fn(&Value) -> R + 'a,
    {
        self.default = Some(Box::new(handler));
        self
    }

    pub(crate) fn eval(&self, value: &Value) -> Option<R> {
        match self.arms.iter().find(|(n, _)| *n == *value.tag()) {
            Some((_, handler)) => Some(handler(value.view())),
            None => self.default.as_ref().map(|fallback| fallback(value)),
        }
    }
}

impl<'a, R> Default for Cases<'a, R> {
    fn default() -> Self {
        Cases::new()
    }
}

/// A case table captured for reuse across many values.
///
/// Built by [`Union::matcher`]; applying it via [`Matcher::run`] is
/// equivalent to [`Union::match_value`] with the same table.
pub struct Matcher<'a, R> {
    cases: Cases<'a, R>,
}

impl<'a, R> Matcher<'a, R> {
    /// Dispatch one value through the captured table.
    #[inline]
    pub fn run(&self, value: &Value) -> Option<R> {
        self.cases.eval(value)
    }
}

impl Union {
    /// Single-case unpack: invoke `on_match` with the payloads if `value` was
    /// built from the named case, else resolve to absence.
    pub fn if_case<R, F>(&self, name: &str, value: &Value, on_match: F) -> Option<R>
    where
        F: FnOnce(Unpacked<'_>) -> R,
    {
        debug_assert!(
            self.contains(name),
            "case `{}` is not part of this union",
            name
        );
        if value.is_case(name) {
            Some(on_match(value.view()))
        } else {
            None
        }
    }

    /// Single-case unpack with an else branch.
    ///
    /// On a tag mismatch `on_else` receives the *original value*, not a
    /// payload, so the branch can re-inspect it or pass it through unchanged.
    pub fn if_case_else<R, F, E>(&self, name: &str, value: &Value, on_match: F, on_else: E) -> R
    where
        F: FnOnce(Unpacked<'_>) -> R,
        E: FnOnce(&Value) -> R,
    {
        match self.if_case(name, value, on_match) {
            Some(result) => result,
            None => on_else(value),
        }
    }

    /// Total match, immediate form: dispatch `value` through `cases` now.
    #[inline]
    pub fn match_value<R>(&self, value: &Value, cases: &Cases<'_, R>) -> Option<R> {
        cases.eval(value)
    }

    /// Total match, deferred form: capture `cases` into a reusable
    /// [`Matcher`].
    ///
    /// ```
    /// use tagcase::prelude::*;
    ///
    /// let light = Union::new([("Red", Case::empty()), ("Green", Case::empty())])?;
    /// let name = light.matcher(
    ///     Cases::new()
    ///         .on("Red", |_| "stop")
    ///         .on("Green", |_| "go"),
    /// );
    ///
    /// let red = light.build("Red", ()).unwrap();
    /// assert_eq!(name.run(&red), Some("stop"));
    /// # Ok::<(), UnionError>(())
    /// ```
    pub fn matcher<'a, R>(&self, cases: Cases<'a, R>) -> Matcher<'a, R> {
        Matcher { cases }
    }
}
