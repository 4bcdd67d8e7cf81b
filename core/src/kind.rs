//! `TypeTag` — the closed set of type tags a schema can name
//!
//! Tags are the leaves of the schema language: a schema author writes
//! `"String"` or `"Number?"` and the matcher checks the classified tag of the
//! value against it. `classify` projects a decoded JSON value onto this set.
//!
//! # JSON cannot carry everything
//!
//! `Date`, `RegExp`, `Map`, and `Set` are recognized tag names, but JSON
//! decoding collapses them (dates arrive as strings, maps as objects), so
//! [`classify`] never produces them. `undefined` is not a JSON value either;
//! it only arises as the classification of an *absent* object entry, which
//! the matcher handles through its entry lookup rather than through
//! `classify`.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::SchemaError;

/// A type tag from the recognized, case-sensitive set.
///
/// Variants are ordered by the classification precedence: the non-JSON tags
/// first (never produced by [`classify`]), then the tags a decoded value can
/// actually carry.
///
/// # Example
///
/// ```
/// use jshape::TypeTag;
///
/// assert_eq!(TypeTag::RegExp.as_str(), "RegExp");
/// assert_eq!("Number?".trim_end_matches('?').parse(), Ok(TypeTag::Number));
/// assert!("number".parse::<TypeTag>().is_err()); // case-sensitive
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// An absent entry. Never a decoded value; see the module docs.
    Undefined,
    /// The JSON `null` value.
    Null,
    /// A date object. Never produced by JSON decoding.
    Date,
    /// A pattern object. Never produced by JSON decoding.
    RegExp,
    /// An ordered sequence.
    Array,
    /// A unique-element collection. Never produced by JSON decoding.
    Set,
    /// An insertion-ordered keyed collection. Never produced by JSON decoding.
    Map,
    /// A boolean.
    Boolean,
    /// A numeric value, integral or fractional.
    Number,
    /// A textual value.
    String,
    /// A plain structural mapping.
    Object,
}

impl TypeTag {
    /// Every recognized tag, in classification precedence order.
    pub const ALL: [TypeTag; 11] = [
        TypeTag::Undefined,
        TypeTag::Null,
        TypeTag::Date,
        TypeTag::RegExp,
        TypeTag::Array,
        TypeTag::Set,
        TypeTag::Map,
        TypeTag::Boolean,
        TypeTag::Number,
        TypeTag::String,
        TypeTag::Object,
    ];

    /// The recognized tag names, for self-correcting error messages.
    pub const NAMES: [&'static str; 11] = [
        "undefined",
        "null",
        "Date",
        "RegExp",
        "Array",
        "Set",
        "Map",
        "Boolean",
        "Number",
        "String",
        "Object",
    ];

    /// Returns the tag's name exactly as authored in a schema literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::Date => "Date",
            TypeTag::RegExp => "RegExp",
            TypeTag::Array => "Array",
            TypeTag::Set => "Set",
            TypeTag::Map => "Map",
            TypeTag::Boolean => "Boolean",
            TypeTag::Number => "Number",
            TypeTag::String => "String",
            TypeTag::Object => "Object",
        }
    }

    /// Returns `true` if a decoded JSON value can classify as this tag.
    ///
    /// `Date`, `RegExp`, `Map`, `Set`, and `undefined` are recognized names
    /// that no decoded value ever carries.
    #[must_use]
    pub const fn is_decodable(self) -> bool {
        matches!(
            self,
            TypeTag::Null
                | TypeTag::Array
                | TypeTag::Boolean
                | TypeTag::Number
                | TypeTag::String
                | TypeTag::Object
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = SchemaError;

    /// Parses a tag name. Case-sensitive: `"number"` is not a tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undefined" => Ok(TypeTag::Undefined),
            "null" => Ok(TypeTag::Null),
            "Date" => Ok(TypeTag::Date),
            "RegExp" => Ok(TypeTag::RegExp),
            "Array" => Ok(TypeTag::Array),
            "Set" => Ok(TypeTag::Set),
            "Map" => Ok(TypeTag::Map),
            "Boolean" => Ok(TypeTag::Boolean),
            "Number" => Ok(TypeTag::Number),
            "String" => Ok(TypeTag::String),
            "Object" => Ok(TypeTag::Object),
            other => Err(SchemaError::UnknownTag {
                tag: other.to_string(),
                available: &TypeTag::NAMES,
            }),
        }
    }
}

/// Classify a decoded JSON value as exactly one [`TypeTag`].
///
/// Total over all values, pure, never fails. `serde_json::Value` is already a
/// discriminated union, so classification is a direct projection — no
/// duck-typed inspection.
///
/// # Example
///
/// ```
/// use jshape::{classify, TypeTag};
/// use serde_json::json;
///
/// assert_eq!(classify(&json!(null)), TypeTag::Null);
/// assert_eq!(classify(&json!(3.5)), TypeTag::Number);
/// assert_eq!(classify(&json!("x")), TypeTag::String);
/// assert_eq!(classify(&json!([1, 2])), TypeTag::Array);
/// assert_eq!(classify(&json!({"a": 1})), TypeTag::Object);
/// ```
#[inline]
#[must_use]
pub fn classify(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Boolean,
        Value::Number(_) => TypeTag::Number,
        Value::String(_) => TypeTag::String,
        Value::Array(_) => TypeTag::Array,
        Value::Object(_) => TypeTag::Object,
    }
}

/// Short human-readable description of a value, used in traces and mismatch
/// reports: tag name plus a compact rendering of the value itself.
///
/// Containers render as their size rather than their contents, so a report
/// against a large response body stays one line per mismatch.
#[must_use]
pub(crate) fn describe(value: &Value) -> std::string::String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("Boolean({b})"),
        Value::Number(n) => format!("Number({n})"),
        Value::String(s) => format!("String({s:?})"),
        Value::Array(items) => format!("Array(len {})", items.len()),
        Value::Object(map) => format!("Object({} keys)", map.len()),
    }
}
