//! `Schema` — the shape descriptor and the structural matcher
//!
//! A `Schema` is a closed variant type over the four shapes the literal
//! language can express: the wildcard, a type tag (optional or not), a
//! sequence, and a mapping. Matching is a pure top-down recursion with
//! subset semantics: extra keys and trailing elements in the value are
//! ignored.
//!
//! # INV: matching is total
//!
//! `matches` never panics and never errors; every (schema, value) pair
//! produces a boolean. Errors exist only at schema *load* time (see
//! [`Schema::validate`] and the literal parser).

use crate::kind::{classify, describe, TypeTag};
use crate::{MatchTrace, SchemaError, MAX_DEPTH, MAX_SEQ_ELEMENTS, MAX_SHAPE_FIELDS};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A shape descriptor for decoded JSON values.
///
/// Authored as a plain literal (see [`Schema::from_literal`]) and matched
/// against values with [`Schema::matches`].
///
/// # Subset semantics
///
/// A mapping value matches a [`Schema::Shape`] when it has *at least* the
/// schema's keys with matching entries; an array matches a [`Schema::Seq`]
/// when its *prefix* matches position-by-position. Extra data is ignored,
/// which is what makes the matcher useful for asserting API response shapes:
/// the assertion pins down the fields under test and tolerates the rest.
///
/// # Example
///
/// ```
/// use jshape::Schema;
/// use serde_json::json;
///
/// let schema = Schema::from_literal(&json!({
///     "id": "Number",
///     "email": "String",
///     "other": { "secret": "Number" },
/// }))
/// .unwrap();
///
/// assert!(schema.matches(&json!({
///     "id": 1,
///     "email": "x@y.com",
///     "other": { "secret": 42, "ignored": true },
/// })));
/// assert!(!schema.matches(&json!({ "id": 1 })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Schema {
    /// Matches any value, including null and an absent entry.
    /// Authored as the literal tag `"*"`.
    Any,

    /// Expects one concrete type tag.
    Tag {
        /// The expected tag.
        tag: TypeTag,
        /// When `true` (authored with a `?` suffix), null and absent
        /// entries also match.
        optional: bool,
    },

    /// Position-by-position prefix match against an array.
    Seq(Vec<Schema>),

    /// Key-by-key subset match against an object.
    Shape(BTreeMap<String, Schema>),
}

impl Schema {
    /// Create a non-optional tag schema.
    #[must_use]
    pub const fn tag(tag: TypeTag) -> Self {
        Schema::Tag {
            tag,
            optional: false,
        }
    }

    /// Create an optional tag schema (the `"Tag?"` form).
    #[must_use]
    pub const fn optional(tag: TypeTag) -> Self {
        Schema::Tag {
            tag,
            optional: true,
        }
    }

    /// Create a sequence schema.
    #[must_use]
    pub fn seq(elems: impl IntoIterator<Item = Schema>) -> Self {
        Schema::Seq(elems.into_iter().collect())
    }

    /// Create a shape schema from `(key, schema)` pairs.
    #[must_use]
    pub fn shape<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Schema::Shape(
            fields
                .into_iter()
                .map(|(k, s)| (k.into(), s))
                .collect(),
        )
    }

    /// Check a decoded JSON value against this schema.
    ///
    /// Pure and total: no mutation of either tree, no panic, no error.
    /// Recursion depth is bounded by the schema's own nesting.
    ///
    /// # Example
    ///
    /// ```
    /// use jshape::{Schema, TypeTag};
    /// use serde_json::json;
    ///
    /// assert!(Schema::Any.matches(&json!(null)));
    /// assert!(Schema::tag(TypeTag::Number).matches(&json!(1.5)));
    /// assert!(!Schema::tag(TypeTag::Number).matches(&json!(null)));
    /// assert!(Schema::optional(TypeTag::Number).matches(&json!(null)));
    /// ```
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        self.matches_entry(Some(value))
    }

    /// Check an object entry that may be absent.
    ///
    /// `None` models a key the value does not contain. Only [`Schema::Any`],
    /// optional tags, and the `undefined` tag accept it.
    pub(crate) fn matches_entry(&self, entry: Option<&Value>) -> bool {
        match self {
            Schema::Any => true,
            Schema::Tag { tag, optional } => match entry {
                None => *optional || *tag == TypeTag::Undefined,
                Some(Value::Null) => *optional || *tag == TypeTag::Null,
                Some(value) => classify(value) == *tag,
            },
            Schema::Seq(elems) => match entry {
                Some(Value::Array(items)) => {
                    items.len() >= elems.len()
                        && elems.iter().zip(items).all(|(s, v)| s.matches(v))
                }
                _ => false,
            },
            Schema::Shape(fields) => match entry {
                Some(Value::Object(map)) => fields
                    .iter()
                    .all(|(key, s)| s.matches_entry(map.get(key))),
                _ => false,
            },
        }
    }

    /// Check a value and capture a full trace of the comparison.
    ///
    /// Unlike [`matches`](Self::matches), tracing evaluates ALL positions
    /// and keys (no short-circuit) so a failed assertion reports every
    /// mismatch at once. The overall result is still identical:
    /// `matches_with_trace(v).matched() == matches(v)` for every pair.
    ///
    /// # Example
    ///
    /// ```
    /// use jshape::{Schema, TypeTag};
    /// use serde_json::json;
    ///
    /// let schema = Schema::shape([("secret", Schema::tag(TypeTag::Number))]);
    /// let trace = schema.matches_with_trace(&json!({"secret": "42"}));
    ///
    /// assert!(!trace.matched());
    /// assert_eq!(trace.mismatches()[0].path, "$.secret");
    /// ```
    #[must_use]
    pub fn matches_with_trace(&self, value: &Value) -> MatchTrace {
        self.trace_entry(Some(value))
    }

    fn trace_entry(&self, entry: Option<&Value>) -> MatchTrace {
        let found = || entry.map_or_else(|| "undefined".to_string(), describe);
        match self {
            Schema::Any | Schema::Tag { .. } => MatchTrace::Leaf {
                matched: self.matches_entry(entry),
                expected: self.to_string(),
                found: found(),
            },
            Schema::Seq(elems) => match entry {
                Some(Value::Array(items)) if items.len() >= elems.len() => {
                    let children: Vec<MatchTrace> = elems
                        .iter()
                        .zip(items)
                        .map(|(s, v)| s.trace_entry(Some(v)))
                        .collect();
                    let matched = children.iter().all(MatchTrace::matched);
                    MatchTrace::Seq { matched, children }
                }
                Some(Value::Array(_)) => MatchTrace::Leaf {
                    matched: false,
                    expected: format!("Array with at least {} elements", elems.len()),
                    found: found(),
                },
                _ => MatchTrace::Leaf {
                    matched: false,
                    expected: "Array".to_string(),
                    found: found(),
                },
            },
            Schema::Shape(fields) => match entry {
                Some(Value::Object(map)) => {
                    let fields: Vec<(String, MatchTrace)> = fields
                        .iter()
                        .map(|(key, s)| (key.clone(), s.trace_entry(map.get(key))))
                        .collect();
                    let matched = fields.iter().all(|(_, t)| t.matched());
                    MatchTrace::Shape { matched, fields }
                }
                _ => MatchTrace::Leaf {
                    matched: false,
                    expected: "Object".to_string(),
                    found: found(),
                },
            },
        }
    }

    /// Returns `true` if this is the wildcard.
    #[must_use]
    pub fn is_any(&self) -> bool {
        matches!(self, Schema::Any)
    }

    /// Returns `true` if this is a tag (optional or not).
    #[must_use]
    pub fn is_tag(&self) -> bool {
        matches!(self, Schema::Tag { .. })
    }

    /// Returns `true` if this is a sequence.
    #[must_use]
    pub fn is_seq(&self) -> bool {
        matches!(self, Schema::Seq(_))
    }

    /// Returns `true` if this is a shape.
    #[must_use]
    pub fn is_shape(&self) -> bool {
        matches!(self, Schema::Shape(_))
    }

    /// Calculate the nesting depth of this schema tree.
    ///
    /// Leaves count 1. Used for depth limit validation at load time.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Schema::Any | Schema::Tag { .. } => 1,
            Schema::Seq(elems) => 1 + elems.iter().map(Schema::depth).max().unwrap_or(0),
            Schema::Shape(fields) => {
                1 + fields.values().map(Schema::depth).max().unwrap_or(0)
            }
        }
    }

    /// Validate this schema against the load-time safety limits.
    ///
    /// Checks:
    /// - nesting depth does not exceed [`MAX_DEPTH`](crate::MAX_DEPTH)
    /// - no `Shape` has more than [`MAX_SHAPE_FIELDS`](crate::MAX_SHAPE_FIELDS) keys
    /// - no `Seq` has more than [`MAX_SEQ_ELEMENTS`](crate::MAX_SEQ_ELEMENTS) positions
    ///
    /// Call this once when a schema is loaded from a file or fixture;
    /// matching itself never re-checks.
    ///
    /// # Errors
    ///
    /// Returns the corresponding [`SchemaError`] variant on the first limit
    /// exceeded.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let depth = self.depth();
        if depth > MAX_DEPTH {
            return Err(SchemaError::DepthExceeded {
                depth,
                max: MAX_DEPTH,
            });
        }
        self.validate_widths()
    }

    fn validate_widths(&self) -> Result<(), SchemaError> {
        match self {
            Schema::Any | Schema::Tag { .. } => Ok(()),
            Schema::Seq(elems) => {
                if elems.len() > MAX_SEQ_ELEMENTS {
                    return Err(SchemaError::TooManyElements {
                        count: elems.len(),
                        max: MAX_SEQ_ELEMENTS,
                    });
                }
                elems.iter().try_for_each(Schema::validate_widths)
            }
            Schema::Shape(fields) => {
                if fields.len() > MAX_SHAPE_FIELDS {
                    return Err(SchemaError::TooManyFields {
                        count: fields.len(),
                        max: MAX_SHAPE_FIELDS,
                    });
                }
                fields.values().try_for_each(Schema::validate_widths)
            }
        }
    }
}

impl fmt::Display for Schema {
    /// Renders the schema back in authorable literal form:
    /// `*`, `Number?`, `[Number, String]`, `{id: Number}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Any => f.write_str("*"),
            Schema::Tag { tag, optional } => {
                write!(f, "{}{}", tag, if *optional { "?" } else { "" })
            }
            Schema::Seq(elems) => {
                f.write_str("[")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_str("]")
            }
            Schema::Shape(fields) => {
                f.write_str("{")?;
                for (i, (key, schema)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {schema}")?;
                }
                f.write_str("}")
            }
        }
    }
}
