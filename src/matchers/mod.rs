//! The value-matching engine.
//!
//! A [`Matcher`] is a named predicate over one [`Value`]. Because a matcher
//! is also a `Value` variant, argument lists handed to assertions can mix
//! literals and matchers; [`matches`] inspects the tag of the expected side
//! and either applies the predicate or falls back to deep equality.
//!
//! # Example
//!
//! ```rust
//! use standin::{any, contains, matches, regexp, Value};
//!
//! // Literals compare by deep equality.
//! assert!(matches(&Value::from(7), &Value::from(7)));
//!
//! // Matchers are applied as predicates.
//! assert!(matches(&any().into(), &Value::Null));
//! assert!(regexp("^user/").matches(&Value::from("user/42")));
//! assert!(contains(3).matches(&Value::seq([1, 2, 3])));
//! ```

mod boolean;
mod builtin;

pub use boolean::{all_of, any_of, xor};
pub use builtin::{any, contains, custom, eq, field, fields, glob, key, keys, regexp};

use std::fmt;
use std::sync::Arc;

use crate::value::{map_get, record_get, Value};


/// Compare an expected value against an actual one.
///
/// If `expected` is a matcher it is applied to `actual`; otherwise the two
/// values compare by deep structural equality. This is the single comparison
/// primitive the call and stub queries are built on.
pub fn matches(expected: &Value, actual: &Value) -> bool {
    match expected.as_matcher() {
        Some(matcher) => matcher.matches(actual),
        None => expected == actual,
    }
}

/// A predicate over one [`Value`], usable anywhere a literal is.
///
/// Built by the constructor functions in this module ([`any`], [`eq`],
/// [`regexp`], [`key`], [`contains`], ...) and combined with [`all_of`],
/// [`any_of`] and [`xor`]. Shape mismatches (asking a non-mapping for a key,
/// a non-sequence for an element) are ordinary non-matches, never errors.
#[derive(Clone)]
pub struct Matcher {
    kind: MatcherKind,
}

#[derive(Clone)]
pub(crate) enum MatcherKind {
    Any,
    Eq(Box<Value>),
    Regexp(regex::bytes::Regex),
    Glob(glob::Pattern),
    Key(Box<Value>, Box<Value>),
    Keys(Vec<(Value, Value)>),
    Contains(Box<Value>),
    Field(String, Box<Value>),
    Fields(Vec<(String, Value)>),
    Custom(Arc<dyn Fn(&Value) -> bool + Send + Sync>),
    AllOf(Vec<Matcher>),
    AnyOf(Vec<Matcher>),
    Xor(Box<Matcher>, Box<Matcher>),
}

impl Matcher {
    pub(crate) fn from_kind(kind: MatcherKind) -> Self {
        Self { kind }
    }

    /// Apply this matcher to a candidate value.
    pub fn matches(&self, candidate: &Value) -> bool {
        match &self.kind {
            MatcherKind::Any => true,
            MatcherKind::Eq(expected) => expected.as_ref() == candidate,
            MatcherKind::Regexp(re) => match candidate.text_bytes() {
                Some(text) => re.is_match(text),
                None => false,
            },
            MatcherKind::Glob(pattern) => match candidate.text_bytes() {
                Some(text) => match std::str::from_utf8(text) {
                    Ok(text) => pattern.matches(text),
                    Err(_) => false,
                },
                None => false,
            },
            MatcherKind::Key(key, expected) => candidate
                .as_mapping()
                .and_then(|entries| map_get(entries, key))
                .is_some_and(|found| matches(expected, found)),
            MatcherKind::Keys(required) => match candidate.as_mapping() {
                // Only the first entry for a key is in effect; shadowed
                // duplicates are inert.
                Some(entries) => required.iter().enumerate().all(|(index, (key, expected))| {
                    required[..index].iter().any(|(earlier, _)| earlier == key)
                        || map_get(entries, key).is_some_and(|found| matches(expected, found))
                }),
                None => false,
            },
            MatcherKind::Contains(expected) => match candidate.as_sequence() {
                Some(items) => items.iter().any(|item| matches(expected, item)),
                None => false,
            },
            MatcherKind::Field(name, expected) => candidate
                .as_record()
                .and_then(|fields| record_get(fields, name))
                .is_some_and(|found| matches(expected, found)),
            MatcherKind::Fields(required) => match candidate.as_record() {
                Some(fields) => required.iter().enumerate().all(|(index, (name, expected))| {
                    required[..index].iter().any(|(earlier, _)| earlier == name)
                        || record_get(fields, name).is_some_and(|found| matches(expected, found))
                }),
                None => false,
            },
            MatcherKind::Custom(predicate) => predicate(candidate),
            MatcherKind::AllOf(matchers) => matchers.iter().all(|m| m.matches(candidate)),
            MatcherKind::AnyOf(matchers) => matchers.iter().any(|m| m.matches(candidate)),
            MatcherKind::Xor(a, b) => a.matches(candidate) != b.matches(candidate),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MatcherKind::Any => f.write_str("any"),
            MatcherKind::Eq(expected) => write!(f, "eq({:?})", expected),
            MatcherKind::Regexp(re) => write!(f, "regexp({:?})", re.as_str()),
            MatcherKind::Glob(pattern) => write!(f, "glob({:?})", pattern.to_string()),
            MatcherKind::Key(key, expected) => write!(f, "key({:?}, {:?})", key, expected),
            MatcherKind::Keys(required) => write!(f, "keys({:?})", required),
            MatcherKind::Contains(expected) => write!(f, "contains({:?})", expected),
            MatcherKind::Field(name, expected) => write!(f, "field({:?}, {:?})", name, expected),
            MatcherKind::Fields(required) => write!(f, "fields({:?})", required),
            MatcherKind::Custom(_) => f.write_str("custom(..)"),
            MatcherKind::AllOf(matchers) => write!(f, "all_of({:?})", matchers),
            MatcherKind::AnyOf(matchers) => write!(f, "any_of({:?})", matchers),
            MatcherKind::Xor(a, b) => write!(f, "xor({:?}, {:?})", a, b),
        }
    }
}
