//! # standin
//!
//! A scriptable test-double library with composable argument matchers.
//!
//! A [`Stub`] stands in for a callable: it records every invocation, hands
//! back return tuples scripted ahead of time, and afterwards answers queries
//! about how it was used. Arguments are dynamically shaped [`Value`]s, and
//! the query side compares them with a small matcher language: literal
//! values mean deep structural equality, while matchers like [`any`],
//! [`regexp`], [`key`], or [`contains`] express looser expectations and
//! compose with [`all_of`], [`any_of`], and [`xor`].
//!
//! ## Quick Start
//!
//! ```rust
//! use standin::{any, args, Stub};
//!
//! let mut fetch = Stub::new();
//! fetch.returns(args!["cached"]);
//!
//! // Code under test invokes the stub.
//! let out = fetch.invoke(args!["users/42", true]);
//! assert_eq!(out, args!["cached"]);
//!
//! // Afterwards, assert on how it was used.
//! assert!(fetch.called_once());
//! assert!(fetch.called_with(&args!["users/42"]));
//! assert!(fetch.called_with(&args![any(), true]));
//! ```
//!
//! ## Matching structured arguments
//!
//! ```rust
//! use standin::{args, contains, key, map, regexp, seq, Stub};
//!
//! let mut log = Stub::new();
//! log.invoke(args![seq![1, 2, 3], map! { "level" => "warn" }]);
//!
//! assert!(log.called_with(&args![contains(2), key("level", regexp("^w"))]));
//! ```
//!
//! ## Scripting returns
//!
//! ```rust
//! use standin::{args, Stub, Value};
//!
//! let mut conn = Stub::new();
//! conn.returns_once(args![Value::Null]);
//! conn.returns(args![true]);
//!
//! assert_eq!(conn.invoke(args![]), args![Value::Null]);
//! assert_eq!(conn.invoke(args![]), args![true]);
//! assert_eq!(conn.invoke(args![]), args![true]);
//! ```

pub mod call;
pub mod matchers;
pub mod stub;
pub mod value;

mod macros;

// Core types
pub use call::Call;
pub use stub::Stub;
pub use value::{Value, ValueError};

// Matcher constructors and combinators
pub use matchers::{
    all_of, any, any_of, contains, custom, eq, field, fields, glob, key, keys, matches, regexp,
    xor, Matcher,
};
