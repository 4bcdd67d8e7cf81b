//! Match trace types for explaining why a value failed a schema.
//!
//! Trace types mirror the [`Schema`](crate::Schema) structure but capture
//! match results instead of expectations. Use
//! [`Schema::matches_with_trace`](crate::Schema::matches_with_trace) to get
//! full visibility into a failed assertion, and
//! [`MatchTrace::mismatches`] to flatten the trace into one line per
//! failing entry.
//!
//! # INV: trace == matches
//!
//! `trace.matched()` always equals what `matches()` returns for the same
//! (schema, value) pair. Unlike plain matching, tracing evaluates ALL
//! children of a sequence or shape (no short-circuit) for maximum
//! debugging visibility.

use std::fmt;

/// Trace of one schema node checked against one value (or absent entry).
///
/// Structural failures — a sequence schema against a non-array, a shape
/// against a string, an array shorter than the schema — collapse to a
/// [`MatchTrace::Leaf`] describing what was expected at that point.
pub enum MatchTrace {
    /// A leaf check: wildcard, tag, or structural mismatch.
    Leaf {
        /// Whether this check passed.
        matched: bool,
        /// What the schema expected here, in authorable form (`Number?`, `*`,
        /// `Array with at least 2 elements`).
        expected: String,
        /// Short description of what the value held (`String("x")`,
        /// `Object(3 keys)`, `undefined` for an absent entry).
        found: String,
    },
    /// A sequence check with per-position child traces.
    Seq {
        /// Whether every position matched.
        matched: bool,
        /// Trace of each schema position (all evaluated, no short-circuit).
        children: Vec<MatchTrace>,
    },
    /// A shape check with per-key child traces.
    Shape {
        /// Whether every key matched.
        matched: bool,
        /// Trace of each schema key (all evaluated, no short-circuit).
        fields: Vec<(String, MatchTrace)>,
    },
}

impl MatchTrace {
    /// Get the overall match result of this trace node.
    #[must_use]
    pub fn matched(&self) -> bool {
        match self {
            Self::Leaf { matched, .. }
            | Self::Seq { matched, .. }
            | Self::Shape { matched, .. } => *matched,
        }
    }

    /// Flatten the trace into one [`Mismatch`] per failing leaf, with
    /// JSONPath-style paths rooted at `$`.
    ///
    /// An empty result means the value matched.
    #[must_use]
    pub fn mismatches(&self) -> Vec<Mismatch> {
        let mut out = Vec::new();
        self.collect_mismatches("$", &mut out);
        out
    }

    fn collect_mismatches(&self, path: &str, out: &mut Vec<Mismatch>) {
        match self {
            Self::Leaf {
                matched,
                expected,
                found,
            } => {
                if !matched {
                    out.push(Mismatch {
                        path: path.to_string(),
                        expected: expected.clone(),
                        found: found.clone(),
                    });
                }
            }
            Self::Seq { children, .. } => {
                for (index, child) in children.iter().enumerate() {
                    child.collect_mismatches(&format!("{path}[{index}]"), out);
                }
            }
            Self::Shape { fields, .. } => {
                for (key, child) in fields {
                    child.collect_mismatches(&format!("{path}.{key}"), out);
                }
            }
        }
    }
}

impl fmt::Debug for MatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf {
                matched,
                expected,
                found,
            } => f
                .debug_struct("Leaf")
                .field("matched", matched)
                .field("expected", expected)
                .field("found", found)
                .finish(),
            Self::Seq { matched, children } => f
                .debug_struct("Seq")
                .field("matched", matched)
                .field("children", children)
                .finish(),
            Self::Shape { matched, fields } => f
                .debug_struct("Shape")
                .field("matched", matched)
                .field("fields", fields)
                .finish(),
        }
    }
}

/// One failing entry in a flattened trace.
///
/// Renders as a single human-readable line:
///
/// ```
/// use jshape::{Schema, TypeTag};
/// use serde_json::json;
///
/// let schema = Schema::shape([("id", Schema::tag(TypeTag::Number))]);
/// let trace = schema.matches_with_trace(&json!({"id": "7"}));
/// let report = trace.mismatches();
///
/// assert_eq!(report.len(), 1);
/// assert_eq!(
///     report[0].to_string(),
///     "$.id: expected Number, found String(\"7\")"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// JSONPath-style location of the failing entry (`$.other.secret`,
    /// `$[2]`).
    pub path: String,
    /// What the schema expected, in authorable form.
    pub expected: String,
    /// What the value held; `undefined` for an absent entry.
    pub found: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: expected {}, found {}", self.path, self.expected, self.found)
    }
}
