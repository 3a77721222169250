//! Runtime value model for recorded arguments and match expectations.
//!
//! Arguments passed to a stub and expectations supplied to assertions share
//! one closed [`Value`] type. A [`Matcher`] is itself a `Value` variant, so a
//! single argument list can mix literals and matchers freely; the engine
//! tells them apart by tag at comparison time.

use thiserror::Error;

use crate::matchers::Matcher;

/// Any runtime value a stub can record or an assertion can expect.
///
/// `Value` is deliberately closed: every shape the matcher engine can inspect
/// (scalars, text, byte strings, sequences, keyed mappings, named-field
/// records) is a variant, and unsupported shapes simply fail to match rather
/// than erroring. Values are built with `From` conversions or the [`args!`],
/// [`seq!`], [`map!`] and [`record!`] macros.
///
/// # Example
///
/// ```rust
/// use standin::{map, Value};
///
/// let v = Value::from(42);
/// assert_eq!(v, Value::Int(42));
///
/// let m = map! {"id" => 7, "name" => "amir"};
/// assert_eq!(m.kind(), "mapping");
/// ```
///
/// [`args!`]: crate::args
/// [`seq!`]: crate::seq
/// [`map!`]: crate::map
/// [`record!`]: crate::record
#[derive(Debug, Clone)]
pub enum Value {
    /// Absence. Equal only to itself.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer. All of Rust's integer widths up to 64 bits (signed and
    /// unsigned) convert into this variant losslessly.
    Int(i128),
    /// Floating point. Compared with `f64` equality, so NaN never matches.
    Float(f64),
    /// Text.
    Str(String),
    /// Byte string. Textual for the purposes of pattern matchers.
    Bytes(Vec<u8>),
    /// Ordered collection.
    Seq(Vec<Value>),
    /// Keyed mapping with arbitrary `Value` keys. Insertion order is kept;
    /// lookups take the first entry with a matching key.
    Map(Vec<(Value, Value)>),
    /// Record-like structure: ordered named fields, pre-described by the
    /// caller (there is no runtime reflection to discover them).
    Record(Vec<(String, Value)>),
    /// A matcher stored as an ordinary value.
    Matcher(Matcher),
}

impl Value {
    /// Build a byte-string value.
    ///
    /// `From<Vec<u8>>` exists too; this constructor reads better with byte
    /// literals: `Value::bytes(b"\x00\x01")`.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Value {
        Value::Bytes(bytes.into())
    }

    /// Build a sequence, converting each item.
    pub fn seq(items: impl IntoIterator<Item = impl Into<Value>>) -> Value {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Build a keyed mapping, converting keys and values.
    pub fn map(entries: impl IntoIterator<Item = (impl Into<Value>, impl Into<Value>)>) -> Value {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a record from ordered name/value pairs.
    pub fn record(
        fields: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>,
    ) -> Value {
        Value::Record(
            fields
                .into_iter()
                .map(|(name, v)| (name.into(), v.into()))
                .collect(),
        )
    }

    /// The tag name of this variant, as used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "mapping",
            Value::Record(_) => "record",
            Value::Matcher(_) => "matcher",
        }
    }

    /// True for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The boolean payload, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload, if this is an `Int`.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float payload, if this is a `Float`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The text payload, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The raw bytes, if this is a `Bytes`.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// The elements, if this is a `Seq`.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is a `Map`.
    pub fn as_mapping(&self) -> Option<&[(Value, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// The named fields, if this is a `Record`.
    pub fn as_record(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// The matcher, if this value is one.
    pub fn as_matcher(&self) -> Option<&Matcher> {
        match self {
            Value::Matcher(m) => Some(m),
            _ => None,
        }
    }

    /// Byte view of textual values. `Str` and `Bytes` both qualify; the
    /// pattern matchers run over this view.
    pub(crate) fn text_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(s) => Some(s.as_bytes()),
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

/// Deep structural equality.
///
/// Tags must agree, then contents compare recursively. Mappings compare as
/// key sets regardless of entry order. Matchers never compare equal to
/// anything, themselves included: a predicate has no structural identity,
/// the same way NaN has no numeric one.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => maps_equal(a, b),
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

/// Mappings are equal when the first-wins lookup agrees on every key present
/// in either side. Shadowed duplicate entries never take part, so a mapping
/// is interchangeable with its effective form.
fn maps_equal(a: &[(Value, Value)], b: &[(Value, Value)]) -> bool {
    let covers = |from: &[(Value, Value)], to: &[(Value, Value)]| {
        from.iter()
            .all(|(key, _)| map_get(from, key) == map_get(to, key))
    };
    covers(a, b) && covers(b, a)
}

/// First entry in `entries` whose key deep-equals `key`.
pub(crate) fn map_get<'a>(entries: &'a [(Value, Value)], key: &Value) -> Option<&'a Value> {
    entries
        .iter()
        .find(|(candidate, _)| candidate == key)
        .map(|(_, value)| value)
}

/// Field of `fields` with exactly the name `name`.
pub(crate) fn record_get<'a>(fields: &'a [(String, Value)], name: &str) -> Option<&'a Value> {
    fields
        .iter()
        .find(|(candidate, _)| candidate == name)
        .map(|(_, value)| value)
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! int_into_value {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Int(value as i128)
            }
        })*
    };
}

int_into_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        Value::Int(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl From<Matcher> for Value {
    fn from(value: Matcher) -> Self {
        Value::Matcher(value)
    }
}

/// JSON interop: values built with `serde_json::json!` convert directly.
/// Objects become mappings with string keys (JSON has no record notion),
/// numbers become `Int` where the JSON number is integral.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Int(i128::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Value::Str(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Extraction from a `Value` found the wrong variant.
///
/// Returned by the `TryFrom` impls that read scripted return tuples back
/// into plain Rust types.
///
/// # Example
///
/// ```rust
/// use standin::Value;
///
/// let err = i64::try_from(&Value::Str("seven".into())).unwrap_err();
/// assert_eq!(err.to_string(), "expected int, found string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ValueError {
    expected: &'static str,
    found: &'static str,
}

impl ValueError {
    pub(crate) fn new(expected: &'static str, found: &'static str) -> Self {
        Self { expected, found }
    }

    /// The kind the conversion needed.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// The kind it found instead.
    pub fn found(&self) -> &'static str {
        self.found
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Int(n) => {
                i64::try_from(*n).map_err(|_| ValueError::new("int in i64 range", "int"))
            }
            other => Err(ValueError::new("int", other.kind())),
        }
    }
}

impl TryFrom<&Value> for i128 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, ValueError> {
        value
            .as_int()
            .ok_or_else(|| ValueError::new("int", value.kind()))
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, ValueError> {
        value
            .as_float()
            .ok_or_else(|| ValueError::new("float", value.kind()))
    }
}

impl TryFrom<&Value> for bool {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, ValueError> {
        value
            .as_bool()
            .ok_or_else(|| ValueError::new("bool", value.kind()))
    }
}

impl TryFrom<&Value> for String {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, ValueError> {
        match value {
            Value::Str(s) => Ok(s.clone()),
            other => Err(ValueError::new("string", other.kind())),
        }
    }
}
