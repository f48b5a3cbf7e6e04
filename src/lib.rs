pub mod case;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;

pub use case::{
    to_camel_case, to_dot_case, to_kebab_case, to_pascal_case, to_snake_case, to_train_case,
    Case, ToCase,
};
pub use checker::CaseChecker;
pub use config::Config;
pub use error::{CaseError, ParseCaseError};

use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub path: PathBuf,
    pub error_count: usize,
    pub fixed_count: usize,
    pub violations: Vec<Violation>,
}

/// An identifier that does not follow the target convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub identifier: String,
    pub expected: String,
    pub line: usize,
    pub column: usize,
    pub context: String,
}
