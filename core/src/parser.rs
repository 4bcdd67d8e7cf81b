//! Literal parser — schemas-as-data built into the [`Schema`] variant type.
//!
//! Schemas are authored as plain literals mixing tag strings, arrays, and
//! mappings:
//!
//! ```json
//! { "id": "Number", "email": "String", "roles": ["String"], "bio": "String?" }
//! ```
//!
//! Two surfaces with different strictness:
//!
//! - [`Schema::from_literal`] / [`Schema::from_json`] — strict: malformed
//!   literals are [`SchemaError`]s with self-correcting messages, caught when
//!   the schema is loaded.
//! - [`matches_literal`] — loose: any parse failure degrades to `false`, so a
//!   misauthored assertion fails as a test failure rather than a crash.

use crate::kind::describe;
use crate::{Schema, SchemaError};
use serde_json::Value;
use std::collections::BTreeMap;

impl Schema {
    /// Build a schema from a literal value.
    ///
    /// - `"*"` → wildcard
    /// - `"Tag"` / `"Tag?"` → (optional) type tag; the name must be one of
    ///   the recognized tags
    /// - array → sequence of parsed elements
    /// - object → shape of parsed entries
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownTag`] for an unrecognized tag name (including
    /// `"*?"` and a bare `"?"`), [`SchemaError::UnsupportedLiteral`] for a
    /// null, boolean, or number literal.
    ///
    /// # Example
    ///
    /// ```
    /// use jshape::{Schema, TypeTag};
    /// use serde_json::json;
    ///
    /// let schema = Schema::from_literal(&json!(["Number", "String?"])).unwrap();
    /// assert_eq!(
    ///     schema,
    ///     Schema::seq([Schema::tag(TypeTag::Number), Schema::optional(TypeTag::String)]),
    /// );
    ///
    /// assert!(Schema::from_literal(&json!("Strin")).is_err());
    /// assert!(Schema::from_literal(&json!(true)).is_err());
    /// ```
    pub fn from_literal(literal: &Value) -> Result<Self, SchemaError> {
        match literal {
            Value::String(s) => Self::from_tag_literal(s),
            Value::Array(elems) => elems
                .iter()
                .map(Self::from_literal)
                .collect::<Result<Vec<_>, _>>()
                .map(Schema::Seq),
            Value::Object(fields) => fields
                .iter()
                .map(|(key, lit)| Ok((key.clone(), Self::from_literal(lit)?)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Schema::Shape),
            other => Err(SchemaError::UnsupportedLiteral {
                found: describe(other),
            }),
        }
    }

    fn from_tag_literal(s: &str) -> Result<Self, SchemaError> {
        if s == "*" {
            return Ok(Schema::Any);
        }
        match s.strip_suffix('?') {
            Some(base) => base.parse().map(Schema::optional),
            None => s.parse().map(Schema::tag),
        }
    }

    /// Parse JSON text into a schema.
    ///
    /// Convenience for loading a schema from a file or an inline string.
    ///
    /// # Errors
    ///
    /// [`SchemaError::InvalidDocument`] when the text is not valid JSON,
    /// otherwise the same errors as [`Schema::from_literal`].
    pub fn from_json(text: &str) -> Result<Self, SchemaError> {
        let literal: Value =
            serde_json::from_str(text).map_err(|e| SchemaError::InvalidDocument {
                source: e.to_string(),
            })?;
        Self::from_literal(&literal)
    }
}

/// Check a value directly against a schema literal, failing closed.
///
/// This is the loose assertion surface: a malformed literal (unknown tag,
/// boolean/number/null schema) returns `false` instead of erroring, so the
/// caller's assertion fails loudly without crashing the test process.
///
/// # Example
///
/// ```
/// use jshape::matches_literal;
/// use serde_json::json;
///
/// assert!(matches_literal(
///     &json!({"id": 1, "name": "a", "extra": true}),
///     &json!({"id": "Number", "name": "String"}),
/// ));
///
/// // Fail closed: `true` is not a schema.
/// assert!(!matches_literal(&json!({"id": 1}), &json!(true)));
/// ```
#[must_use]
pub fn matches_literal(value: &Value, literal: &Value) -> bool {
    Schema::from_literal(literal).is_ok_and(|schema| schema.matches(value))
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Schema {
    /// Deserializes a schema from its literal form, through any
    /// self-describing format (JSON, YAML). Parse errors surface as
    /// deserialization errors.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = Value::deserialize(deserializer)?;
        Schema::from_literal(&literal).map_err(serde::de::Error::custom)
    }
}
