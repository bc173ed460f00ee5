//! Typed rules over query parameter names.

/// A rule describing how one named parameter is emitted.
///
/// Rules are evaluated against an input map in declaration order; the
/// output sequence preserves that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRule {
    /// The parameter must be present in the input; its first value is
    /// emitted. Absence is an error.
    Required(String),

    /// The parameter is emitted with its first input value when present,
    /// and silently dropped otherwise.
    Optional(String),

    /// The parameter is always emitted with the given constant value,
    /// regardless of input.
    Fixed(String, Vec<u8>),
}
