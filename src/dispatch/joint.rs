//! Joint match over two unions: state × event transition tables.
//!
//! Role
//! - [`JointCases`] is a nested table keyed by the first value's tag, then the
//!   second's, with a mandatory fallback receiving both original values.
//! - [`Union::match_with`] validates that both unions are single-data (every
//!   case carries at most one payload) and captures the table into a reusable
//!   binary [`JointMatcher`].
//!
//! Handlers receive each side's single payload (`None` for a payload-less
//!   case), never the wrapped values; only the fallback sees those.

use log::trace;

use crate::error::UnionError;
use crate::name::CaseName;
use crate::union::Union;
use crate::value::{Payload, Value};

type PairHandler<'a, R> = Box<dyn Fn(Option<&Payload>, Option<&Payload>) -> R + 'a>;
type DefaultHandler<'a, R> = Box<dyn Fn(&Value, &Value) -> R + 'a>;

/// Nested handler table for a two-union joint match.
///
/// The fallback is mandatory and supplied at construction: a transition table
/// routinely leaves most of the state × event grid to "keep the current
/// state", so there is no all-pairs-covered variant of this contract.
pub struct JointCases<'a, R> {
    arms: Vec<(CaseName, Vec<(CaseName, PairHandler<'a, R>)>)>,
    default: DefaultHandler<'a, R>,
}

impl<'a, R> JointCases<'a, R> {
    /// A table holding only the mandatory fallback.
    pub fn new<D>(default: D) -> JointCases<'a, R>
    where
        D: Fn(&Value, &Value) -> R + 'a,
    {
        JointCases {
            arms: Vec::new(),
            default: Box::new(default),
        }
    }

    /// Register the handler for one (first-tag, second-tag) pair.
    ///
    /// Registering a pair twice replaces the earlier handler.
    pub fn on<N, M, F>(mut self, first: N, second: M, handler: F) -> JointCases<'a, R>
    where
        N: Into<CaseName>,
        M: Into<CaseName>,
        F: Fn(Option<&Payload>, Option<&Payload>) -> R + 'a,
    {
        let first: CaseName = first.into();
        let second: CaseName = second.into();
        let handler: PairHandler<'a, R> = Box::new(handler);

        let outer = match self.arms.iter().position(|(n, _)| *n == first) {
            Some(idx) => idx,
            None => {
                self.arms.push((first, Vec::new()));
                self.arms.len() - 1
            }
        };
        let inner = &mut self.arms[outer].1;
        match inner.iter().position(|(n, _)| *n == second) {
            Some(idx) => inner[idx].1 = handler,
            None => inner.push((second, handler)),
        }
        self
    }

    fn eval(&self, a: &Value, b: &Value) -> R {
        if let Some((_, inner)) = self.arms.iter().find(|(n, _)| *n == *a.tag()) {
            if let Some((_, handler)) = inner.iter().find(|(n, _)| *n == *b.tag()) {
                return handler(a.payload(0), b.payload(0));
            }
        }
        (self.default)(a, b)
    }
}

/// A joint table captured for reuse, built by [`Union::match_with`].
pub struct JointMatcher<'a, R> {
    cases: JointCases<'a, R>,
}

impl<R> core::fmt::Debug for JointMatcher<'_, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("JointMatcher")
            .field("arms", &self.cases.arms.len())
            .finish_non_exhaustive()
    }
}

impl<'a, R> JointMatcher<'a, R> {
    /// Dispatch one pair of values through the captured table.
    #[inline]
    pub fn run(&self, a: &Value, b: &Value) -> R {
        self.cases.eval(a, b)
    }
}

impl Union {
    /// Build a joint matcher over this union (first position) and `other`
    /// (second position).
    ///
    /// Fails with [`UnionError::MultiPayloadJoint`] if either union declares
    /// a two- or three-payload case: joint handlers receive one payload per
    /// side, so there is no defined spreading for wider cases. `other`
    /// participates only in this validation; dispatch itself is driven
    /// entirely by the tags of the values passed to [`JointMatcher::run`].
    pub fn match_with<'a, R>(
        &self,
        other: &Union,
        cases: JointCases<'a, R>,
    ) -> Result<JointMatcher<'a, R>, UnionError> {
        for union in [self, other] {
            for ctor in union.ctors() {
                let count = ctor.case().payload_count();
                if !ctor.case().is_single_data() {
                    return Err(UnionError::MultiPayloadJoint {
                        name: ctor.name().to_string(),
                        count,
                    });
                }
            }
        }
        trace!(
            "joint matcher over {} x {} case(s)",
            self.len(),
            other.len()
        );
        Ok(JointMatcher { cases })
    }
}
