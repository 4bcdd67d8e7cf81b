//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the jshape matcher.

use jshape::matches_literal;
use jshape::Schema;
use serde::Deserialize;
use serde_json::Value;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    /// The schema literal, kept in data form so fixtures can also exercise
    /// the fail-closed behavior of malformed literals.
    pub schema: Value,
    pub cases: Vec<TestCase>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub value: Value,
    pub expect: bool,
}

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: bool,
    pub actual: bool,
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Vec<CaseResult> {
        self.cases
            .iter()
            .map(|case| {
                let actual = matches_literal(&case.value, &self.schema);
                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == case.expect,
                    expected: case.expect,
                    actual,
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self.run();
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {}, got {}{}",
                self.name,
                result.case_name,
                result.expected,
                result.actual,
                self.explain(&result.case_name)
            );
        }
    }

    /// Mismatch detail for a failing case, when the schema parses.
    fn explain(&self, case_name: &str) -> String {
        let Ok(schema) = Schema::from_literal(&self.schema) else {
            return String::new();
        };
        let Some(case) = self.cases.iter().find(|c| c.name == case_name) else {
            return String::new();
        };
        let lines: Vec<String> = schema
            .matches_with_trace(&case.value)
            .mismatches()
            .iter()
            .map(ToString::to_string)
            .collect();
        if lines.is_empty() {
            String::new()
        } else {
            format!("\n  {}", lines.join("\n  "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"
name: user shape
description: Response bodies carry id and email
schema:
  id: Number
  email: String
cases:
  - name: full body
    value: { id: 1, email: x@y.com, extra: true }
    expect: true
  - name: wrong id type
    value: { id: "1", email: x@y.com }
    expect: false
"#;

    #[test]
    fn fixture_parses_and_runs() {
        let fixture = Fixture::from_yaml(FIXTURE).unwrap();
        assert_eq!(fixture.name, "user shape");
        assert_eq!(fixture.cases.len(), 2);

        let results = fixture.run();
        assert!(results.iter().all(|r| r.passed));
        fixture.run_and_assert();
    }

    #[test]
    fn multi_doc_fixtures_parse() {
        let yaml = format!("{FIXTURE}---{FIXTURE}");
        let fixtures = Fixture::from_yaml_multi(&yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
    }

    #[test]
    fn failing_case_is_reported() {
        let yaml = r#"
name: broken expectation
description: Deliberately wrong expect value
schema: Number
cases:
  - name: string is not a number
    value: "x"
    expect: true
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        let results = fixture.run();
        assert_eq!(results.len(), 1);
        assert!(!results[0].passed);
        assert!(!results[0].actual);
    }

    #[test]
    fn malformed_schema_fails_closed_in_fixtures() {
        let yaml = r#"
name: fail closed
description: A numeric literal is not a schema
schema: 42
cases:
  - name: nothing matches a malformed schema
    value: { id: 1 }
    expect: false
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        fixture.run_and_assert();
    }
}
