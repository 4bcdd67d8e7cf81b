//! jshape - structural shape matcher for decoded JSON values
//!
//! A predicate library for asserting that a decoded JSON value — typically an
//! API response body — has an expected shape. Schemas are authored as plain
//! literals and matched with subset semantics: extra keys and trailing array
//! elements are ignored, so an assertion pins down exactly the fields under
//! test.
//!
//! # Architecture
//!
//! - [`TypeTag`] / [`classify`] — closed classification of decoded values
//!   (serde_json's `Value` is already discriminated; no duck typing)
//! - [`Schema`] — closed variant type: `Any | Tag | Seq | Shape`
//! - [`Schema::from_literal`] — strict literal-to-variant parser
//! - [`matches_literal`] — loose entry point that fails closed
//! - [`MatchTrace`] / [`Mismatch`] — explain a failed match, one line per
//!   failing entry
//!
//! # Key Design Points
//!
//! 1. **Matching is total**: `matches` never panics or errors for any
//!    (schema, value) pair. Errors exist only at schema load time.
//!
//! 2. **Absent is not null**: a shape entry the value does not contain is
//!    *absent* (`undefined`), satisfied only by `*`, optional tags (`Tag?`),
//!    and the `undefined` tag. A present `null` additionally satisfies the
//!    `null` tag.
//!
//! 3. **Load-time hardening**: depth and width limits are validated once via
//!    [`Schema::validate`], never re-checked per match.
//!
//! # Example
//!
//! ```
//! use jshape::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::from_literal(&json!({
//!     "id": "Number",
//!     "email": "String",
//!     "bio": "String?",
//!     "roles": ["String"],
//! }))
//! .unwrap();
//!
//! let body = json!({
//!     "id": 7,
//!     "email": "ada@example.com",
//!     "bio": null,
//!     "roles": ["author", "admin"],
//!     "createdAt": "2024-01-01T00:00:00Z", // extra keys are fine
//! });
//!
//! assert!(schema.matches(&body));
//! assert!(!schema.matches(&json!({ "id": "7" })));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod kind;
mod parser;
mod schema;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use kind::{classify, TypeTag};
pub use parser::matches_literal;
pub use schema::Schema;
pub use trace::{MatchTrace, Mismatch};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use jshape::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        classify, matches_literal, MatchTrace, Mismatch, Schema, SchemaError, TypeTag,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum allowed nesting depth for a schema.
///
/// Protects against stack overflow from deeply nested schemas. Validate at
/// load time via [`Schema::validate`]; matching itself does not re-check.
pub const MAX_DEPTH: usize = 32;

/// Maximum number of keys in a single [`Schema::Shape`].
///
/// Prevents width-based resource exhaustion: a schema with a huge flat shape
/// bypasses [`MAX_DEPTH`] but still costs per-key work on every match.
pub const MAX_SHAPE_FIELDS: usize = 256;

/// Maximum number of positions in a single [`Schema::Seq`].
///
/// Same width-based protection as [`MAX_SHAPE_FIELDS`], applied to sequence
/// positions.
pub const MAX_SEQ_ELEMENTS: usize = 256;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from schema parsing and validation.
///
/// These errors are caught when a schema is loaded, not when it is matched:
/// matching is a total predicate and never fails. Fix the schema literal and
/// reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A tag string names no recognized type tag.
    UnknownTag {
        /// The unrecognized tag name.
        tag: String,
        /// Tag names that ARE recognized (for self-correcting error messages).
        available: &'static [&'static str],
    },
    /// A schema literal was a null, boolean, or number.
    UnsupportedLiteral {
        /// Description of the offending literal.
        found: String,
    },
    /// Schema text failed to parse as a document at all.
    InvalidDocument {
        /// The underlying parse error message.
        source: String,
    },
    /// Schema nesting exceeds [`MAX_DEPTH`].
    DepthExceeded {
        /// Actual depth of the schema tree.
        depth: usize,
        /// Maximum allowed depth.
        max: usize,
    },
    /// A shape has too many keys.
    TooManyFields {
        /// Actual key count.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// A sequence has too many positions.
    TooManyElements {
        /// Actual position count.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTag { tag, available } => {
                write!(
                    f,
                    "unknown type tag \"{tag}\" — recognized: {}",
                    available.join(", ")
                )
            }
            Self::UnsupportedLiteral { found } => {
                write!(
                    f,
                    "a schema literal must be a tag string, a sequence, or a mapping — found {found}"
                )
            }
            Self::InvalidDocument { source } => {
                write!(f, "schema document failed to parse: {source}")
            }
            Self::DepthExceeded { depth, max } => {
                write!(
                    f,
                    "schema nesting depth is {depth}, but maximum allowed is {max} \
                     — flatten the schema"
                )
            }
            Self::TooManyFields { count, max } => {
                write!(f, "shape has {count} keys, but maximum allowed is {max}")
            }
            Self::TooManyElements { count, max } => {
                write!(
                    f,
                    "sequence has {count} positions, but maximum allowed is {max}"
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}
