//! Boolean combinators over matchers.

use super::{Matcher, MatcherKind};

/// True iff every sub-matcher accepts the candidate.
///
/// Evaluation stops at the first rejection. An empty list is vacuously true
/// (the identity of conjunction), so `all_of(vec![])` behaves like `any()`.
///
/// # Example
///
/// ```rust
/// use standin::{all_of, regexp, Value};
///
/// let m = all_of(vec![regexp("^user/"), regexp("[0-9]+$")]);
/// assert!(m.matches(&Value::from("user/42")));
/// assert!(!m.matches(&Value::from("user/none")));
/// ```
pub fn all_of(matchers: Vec<Matcher>) -> Matcher {
    Matcher::from_kind(MatcherKind::AllOf(matchers))
}

/// True iff at least one sub-matcher accepts the candidate.
///
/// Evaluation stops at the first acceptance. An empty list is false (the
/// identity of disjunction).
///
/// # Example
///
/// ```rust
/// use standin::{any_of, eq, Value};
///
/// let m = any_of(vec![eq(1), eq(2)]);
/// assert!(m.matches(&Value::from(2)));
/// assert!(!m.matches(&Value::from(3)));
/// ```
pub fn any_of(matchers: Vec<Matcher>) -> Matcher {
    Matcher::from_kind(MatcherKind::AnyOf(matchers))
}

/// True iff exactly one of the two matchers accepts the candidate.
pub fn xor(a: Matcher, b: Matcher) -> Matcher {
    Matcher::from_kind(MatcherKind::Xor(Box::new(a), Box::new(b)))
}
