mod yaml_runner;

pub use yaml_runner::{
    CaseKind, NamingCase, TestResult, load_naming_cases_from_str, run_naming_case,
};
