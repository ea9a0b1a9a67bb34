use strum::EnumIs;
use thiserror::Error;

/// Errors raised while building a union registry or a joint matcher.
///
/// Dispatch itself never errors: an unmatched value without a default handler
/// resolves to `None`, a normal outcome callers opt out of by supplying
/// `default`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, Error)]
pub enum UnionError {
    /// A declared case name collides with the dispatcher surface.
    #[error(
        "The case name `{name}` is reserved by the dispatcher surface (`if`, `match`, `matchWith`, `T`, `default`) and cannot be used for a case."
    )]
    ReservedCaseName { name: String },

    /// The same case name appears more than once in one registry table.
    #[error("The case `{name}` is declared more than once within the same union.")]
    DuplicateCaseName { name: String },

    /// A joint matcher was requested over a union with a multi-payload case.
    #[error(
        "Joint matching is only defined over single-data unions, but the case `{name}` carries {count} payload values."
    )]
    MultiPayloadJoint { name: String, count: usize },
}
