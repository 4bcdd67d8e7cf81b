//! jshape-test: assertion harness for jshape conformance testing
//!
//! Provides the test-facing surface: [`assert_shape`] for asserting decoded
//! response bodies inside a test, and the [`fixture`] module for running
//! YAML conformance suites.
//!
//! # Example
//!
//! ```
//! use jshape_test::assert_shape;
//! use serde_json::json;
//!
//! // Typically `body` is a decoded HTTP response.
//! let body = json!({ "id": 7, "email": "ada@example.com", "sessionId": "abc" });
//!
//! assert_shape(&body, &json!({ "id": "Number", "email": "String" }));
//! ```

use jshape::prelude::*;
use serde_json::Value;

pub mod fixture;

/// Assert that a decoded JSON value matches a schema literal.
///
/// # Panics
///
/// Panics when the literal is not a well-formed schema, or when the value
/// does not match — listing every failing entry, one line per mismatch:
///
/// ```text
/// value does not match {id: Number}:
///   $.id: expected Number, found String("7")
/// ```
pub fn assert_shape(value: &Value, literal: &Value) {
    let schema = match Schema::from_literal(literal) {
        Ok(schema) => schema,
        Err(e) => panic!("bad shape assertion: {e}"),
    };
    let trace = schema.matches_with_trace(value);
    if !trace.matched() {
        let lines: Vec<String> = trace.mismatches().iter().map(ToString::to_string).collect();
        panic!(
            "value does not match {schema}:\n  {}",
            lines.join("\n  ")
        );
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::assert_shape;
    pub use super::fixture::Fixture;
    pub use jshape::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assert_shape_accepts_matching_body() {
        assert_shape(
            &json!({ "id": 1, "email": "x@y.com", "extra": true }),
            &json!({ "id": "Number", "email": "String" }),
        );
    }

    #[test]
    fn assert_shape_accepts_wildcard_and_optional() {
        assert_shape(
            &json!({ "payload": [1, "two", null] }),
            &json!({ "payload": ["*", "*", "Number?"] }),
        );
    }

    #[test]
    #[should_panic(expected = "$.id: expected Number")]
    fn assert_shape_panics_with_path_on_mismatch() {
        assert_shape(&json!({ "id": "7" }), &json!({ "id": "Number" }));
    }

    #[test]
    #[should_panic(expected = "bad shape assertion")]
    fn assert_shape_panics_on_malformed_literal() {
        assert_shape(&json!({}), &json!({ "id": "NotATag" }));
    }

    #[test]
    #[should_panic(expected = "undefined")]
    fn assert_shape_reports_absent_entries() {
        assert_shape(&json!({}), &json!({ "email": "String" }));
    }
}
