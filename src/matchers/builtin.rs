//! Built-in matcher constructors.
//!
//! Each constructor returns a [`Matcher`] value. Anywhere one of them takes
//! an expectation, a plain value and a nested matcher are both accepted:
//! `key("id", any())` is as valid as `key("id", 42)`.

use std::sync::Arc;

use crate::value::Value;

use super::{Matcher, MatcherKind};

/// The wildcard: matches every value, `Null` included.
///
/// # Example
///
/// ```rust
/// use standin::{any, Value};
///
/// assert!(any().matches(&Value::Null));
/// assert!(any().matches(&Value::from("anything")));
/// ```
pub fn any() -> Matcher {
    Matcher::from_kind(MatcherKind::Any)
}

/// Deep equality as an explicit matcher.
///
/// Literals already compare by deep equality, so this is mostly useful for
/// putting literals under combinators: `any_of(vec![eq(1), eq(2)])`.
pub fn eq(expected: impl Into<Value>) -> Matcher {
    Matcher::from_kind(MatcherKind::Eq(Box::new(expected.into())))
}

/// Matches textual values (strings and byte strings) containing a match for
/// the given regular expression. Anchor the pattern if you need a full
/// match. Non-textual candidates never match.
///
/// # Example
///
/// ```rust
/// use standin::{regexp, Value};
///
/// let m = regexp(r"^npm (install|i)$");
/// assert!(m.matches(&Value::from("npm install")));
/// assert!(!m.matches(&Value::from("npm run")));
/// assert!(!m.matches(&Value::from(42)));
/// ```
///
/// # Panics
///
/// Panics if the pattern is not a valid regular expression.
pub fn regexp(pattern: &str) -> Matcher {
    let re = match regex::bytes::Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => panic!("regexp matcher pattern {:?} is invalid: {}", pattern, err),
    };
    Matcher::from_kind(MatcherKind::Regexp(re))
}

/// Matches textual values against a shell-style glob pattern, e.g. `*.txt`
/// or `**/config.json`. The whole text must match. Byte strings must be
/// valid UTF-8 to match; non-textual candidates never match.
///
/// # Example
///
/// ```rust
/// use standin::{glob, Value};
///
/// assert!(glob("*.txt").matches(&Value::from("notes.txt")));
/// assert!(!glob("*.txt").matches(&Value::from("notes.rs")));
/// ```
///
/// # Panics
///
/// Panics if the pattern is not a valid glob.
pub fn glob(pattern: &str) -> Matcher {
    let compiled = match glob::Pattern::new(pattern) {
        Ok(compiled) => compiled,
        Err(err) => panic!("glob matcher pattern {:?} is invalid: {}", pattern, err),
    };
    Matcher::from_kind(MatcherKind::Glob(compiled))
}

/// Matches mappings whose entry at `key` matches `expected`.
///
/// Candidates that are not mappings, or lack the key, do not match.
///
/// # Example
///
/// ```rust
/// use standin::{key, map, regexp};
///
/// let m = key("path", regexp(r"\.rs$"));
/// assert!(m.matches(&map! {"path" => "src/lib.rs", "mode" => "read"}));
/// assert!(!m.matches(&map! {"mode" => "read"}));
/// ```
pub fn key(key: impl Into<Value>, expected: impl Into<Value>) -> Matcher {
    Matcher::from_kind(MatcherKind::Key(
        Box::new(key.into()),
        Box::new(expected.into()),
    ))
}

/// Matches mappings containing every entry of `mapping`, each value matching
/// recursively. The candidate may carry extra keys. An empty expectation
/// matches any mapping. Duplicated keys in the expectation defer to the
/// first entry, the same way mapping lookups do.
///
/// # Panics
///
/// Panics if `mapping` is not itself a mapping value.
pub fn keys(mapping: impl Into<Value>) -> Matcher {
    match mapping.into() {
        Value::Map(entries) => Matcher::from_kind(MatcherKind::Keys(entries)),
        other => panic!(
            "keys matcher must be built from a mapping, got {}",
            other.kind()
        ),
    }
}

/// Matches records whose field `name` matches `expected`.
///
/// Field lookup is identifier-exact. Candidates that are not records, or
/// have no such field, do not match.
///
/// # Example
///
/// ```rust
/// use standin::{any, field, record};
///
/// let m = field("id", any());
/// assert!(m.matches(&record! {"id" => 7, "name" => "amir"}));
/// assert!(!m.matches(&record! {"name" => "amir"}));
/// ```
pub fn field(name: impl Into<String>, expected: impl Into<Value>) -> Matcher {
    Matcher::from_kind(MatcherKind::Field(name.into(), Box::new(expected.into())))
}

/// Matches records carrying every field of `record`, each value matching
/// recursively. The candidate may carry extra fields. Duplicated field names
/// in the expectation defer to the first entry, the same way field lookups
/// do.
///
/// # Panics
///
/// Panics if `record` is not itself a record value.
pub fn fields(record: impl Into<Value>) -> Matcher {
    match record.into() {
        Value::Record(required) => Matcher::from_kind(MatcherKind::Fields(required)),
        other => panic!(
            "fields matcher must be built from a record, got {}",
            other.kind()
        ),
    }
}

/// Matches sequences with at least one element matching `expected`.
///
/// Non-sequence candidates never match.
///
/// # Example
///
/// ```rust
/// use standin::{contains, regexp, seq, Value};
///
/// assert!(contains("hello").matches(&seq!["hello", "goodbye"]));
/// assert!(contains(regexp("^good")).matches(&seq!["hello", "goodbye"]));
/// assert!(!contains("hello").matches(&Value::from("hello")));
/// ```
pub fn contains(expected: impl Into<Value>) -> Matcher {
    Matcher::from_kind(MatcherKind::Contains(Box::new(expected.into())))
}

/// Wraps an arbitrary predicate as a matcher, for expectations none of the
/// built-ins cover.
///
/// # Example
///
/// ```rust
/// use standin::{custom, Value};
///
/// let even = custom(|v| v.as_int().map_or(false, |n| n % 2 == 0));
/// assert!(even.matches(&Value::from(4)));
/// assert!(!even.matches(&Value::from(5)));
/// assert!(!even.matches(&Value::from("4")));
/// ```
pub fn custom<F>(predicate: F) -> Matcher
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Matcher::from_kind(MatcherKind::Custom(Arc::new(predicate)))
}
