//! Convenience macros for building argument lists and composite values.
//!
//! Each macro accepts anything convertible with `Into<Value>`, so literals,
//! matchers, and already-built values mix freely.

/// Create an argument list (`Vec<Value>`) from comma-separated expressions.
///
/// This is the form [`Stub::invoke`](crate::Stub::invoke) and the
/// `called_with` query family expect.
///
/// # Example
///
/// ```
/// use standin::{args, Stub};
///
/// let mut stub = Stub::new();
/// stub.invoke(args![1, "two"]);
/// assert!(stub.called_with(&args![1]));
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}

/// Create a sequence value from comma-separated expressions.
///
/// # Example
///
/// ```
/// use standin::{seq, Value};
///
/// assert_eq!(seq![1, 2, 3], Value::seq([1, 2, 3]));
/// ```
#[macro_export]
macro_rules! seq {
    ($($value:expr),* $(,)?) => {
        $crate::Value::Seq(vec![$($crate::Value::from($value)),*])
    };
}

/// Create a mapping value from `key => value` pairs.
///
/// Entries keep insertion order; lookups take the first entry with a
/// matching key.
///
/// # Example
///
/// ```
/// use standin::{key, map};
///
/// let config = map! {
///     "retries" => 3,
///     "verbose" => true,
/// };
/// assert!(key("retries", 3).matches(&config));
/// ```
#[macro_export]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut entries = Vec::new();
        $(
            entries.push(($crate::Value::from($key), $crate::Value::from($value)));
        )*
        $crate::Value::Map(entries)
    }};
}

/// Create a record value from `name => value` pairs.
///
/// Field names are plain strings; field order is part of the record's
/// identity when records are compared for equality.
///
/// # Example
///
/// ```
/// use standin::{field, record};
///
/// let user = record! {
///     "name" => "ada",
///     "admin" => false,
/// };
/// assert!(field("name", "ada").matches(&user));
/// ```
#[macro_export]
macro_rules! record {
    ($($name:expr => $value:expr),* $(,)?) => {{
        let mut fields = Vec::new();
        $(
            fields.push(($name.to_string(), $crate::Value::from($value)));
        )*
        $crate::Value::Record(fields)
    }};
}
