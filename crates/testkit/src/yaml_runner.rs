use std::collections::BTreeMap;

use serde::Deserialize;
use snakeql_core::{LogicalName, NamingStrategy};

/// One conformance case from a YAML document keyed by case name.
///
/// A case either expects a resolved identifier (`expect` plus
/// `expect_quoted`) or an error whose message contains `error`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamingCase {
    pub kind: CaseKind,
    pub input: String,
    /// Quoting provenance of the logical name.
    #[serde(default)]
    pub quoted: bool,
    #[serde(default)]
    pub expect: Option<String>,
    #[serde(default)]
    pub expect_quoted: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    Table,
    Column,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Passed,
    Failed(String),
}

pub fn load_naming_cases_from_str(
    yaml: &str,
) -> Result<BTreeMap<String, NamingCase>, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

pub fn run_naming_case(strategy: &dyn NamingStrategy, case: &NamingCase) -> TestResult {
    let logical = LogicalName {
        text: case.input.clone(),
        explicitly_quoted: case.quoted,
    };

    let resolved = match case.kind {
        CaseKind::Table => strategy.resolve_table_name(&logical),
        CaseKind::Column => strategy.resolve_column_name(&logical),
    };

    match (resolved, case.error.as_deref()) {
        (Ok(physical), None) => {
            let Some(expected_text) = case.expect.as_deref() else {
                return TestResult::Failed(
                    "case declares neither expect nor error".to_string(),
                );
            };
            if physical.text != expected_text {
                return TestResult::Failed(format!(
                    "expected text '{expected_text}', got '{}'",
                    physical.text
                ));
            }
            if physical.requires_quoting != case.expect_quoted {
                return TestResult::Failed(format!(
                    "expected requires_quoting={}, got {}",
                    case.expect_quoted, physical.requires_quoting
                ));
            }
            TestResult::Passed
        }
        (Ok(physical), Some(expected_error)) => TestResult::Failed(format!(
            "expected error containing '{expected_error}', got identifier '{}'",
            physical.text
        )),
        (Err(error), Some(expected_error)) => {
            let message = error.to_string();
            if message.contains(expected_error) {
                TestResult::Passed
            } else {
                TestResult::Failed(format!(
                    "expected error containing '{expected_error}', got '{message}'"
                ))
            }
        }
        (Err(error), None) => TestResult::Failed(format!("unexpected error: {error}")),
    }
}
