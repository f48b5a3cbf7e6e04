pub mod walk;

use crate::case::Case;
use crate::scanner::{Scanner, TokenSpan};
use crate::{CheckResult, Config, Violation};
use anyhow::{Context, Result};
use rayon::prelude::*;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CaseChecker {
    custom_scanner: Option<Scanner>,
    min_length: usize,
    ignore_patterns: Vec<Regex>,
}

impl CaseChecker {
    pub fn new(config: &Config) -> Result<Self> {
        let custom_scanner = config
            .token_pattern
            .as_deref()
            .map(|pattern| Scanner::with_pattern(pattern, config.min_length))
            .transpose()?;

        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => log::warn!("Invalid ignore pattern '{}': {}", pattern, e),
            }
        }

        Ok(Self {
            custom_scanner,
            min_length: config.min_length,
            ignore_patterns,
        })
    }

    pub fn check_str(&self, content: &str, case: Case) -> Vec<Violation> {
        self.find_violations(content, case)
            .into_iter()
            .map(|(span, expected)| Violation {
                identifier: span.text,
                expected,
                line: span.line,
                column: span.column,
                context: span.context,
            })
            .collect()
    }

    /// Rewrite every violating identifier; returns the new content and the number of fixes
    pub fn fix_str(&self, content: &str, case: Case) -> (String, usize) {
        let violations = self.find_violations(content, case);
        let mut new_content = content.to_string();

        // Back to front so earlier byte offsets stay valid
        for (span, expected) in violations.iter().rev() {
            new_content.replace_range(span.start..span.end, expected);
        }

        (new_content, violations.len())
    }

    pub fn check_file(&self, file_path: &Path, case: Case) -> Result<CheckResult> {
        let Some(content) = read_text(file_path)? else {
            return Ok(empty_result(file_path));
        };

        let violations = self.check_str(&content, case);
        log::debug!(
            "{}: {} violation(s)",
            file_path.display(),
            violations.len()
        );

        Ok(CheckResult {
            path: file_path.to_path_buf(),
            error_count: violations.len(),
            fixed_count: 0,
            violations,
        })
    }

    pub fn fix_file(&self, file_path: &Path, case: Case) -> Result<CheckResult> {
        let Some(content) = read_text(file_path)? else {
            return Ok(empty_result(file_path));
        };

        let (new_content, fixed_count) = self.fix_str(&content, case);

        // Write back to file
        if fixed_count > 0 {
            fs::write(file_path, new_content)
                .with_context(|| format!("Failed to write file: {}", file_path.display()))?;
            log::debug!("{}: fixed {} identifier(s)", file_path.display(), fixed_count);
        }

        Ok(CheckResult {
            path: file_path.to_path_buf(),
            error_count: 0,
            fixed_count,
            violations: Vec::new(),
        })
    }

    /// Check (or fix) every file under `paths` in parallel, preserving input order
    pub fn check_paths(&self, paths: &[PathBuf], case: Case, fix: bool) -> Result<Vec<CheckResult>> {
        let files = walk::collect_files(paths);
        log::info!("Checking {} file(s) for {} case", files.len(), case);

        files
            .par_iter()
            .map(|file| {
                if fix {
                    self.fix_file(file, case)
                } else {
                    self.check_file(file, case)
                }
            })
            .collect()
    }

    fn find_violations(&self, content: &str, case: Case) -> Vec<(TokenSpan, String)> {
        let scanner = match &self.custom_scanner {
            Some(scanner) => scanner.clone(),
            None => Scanner::for_case(case, self.min_length),
        };

        scanner
            .scan(content)
            .into_iter()
            .filter(|span| !self.should_ignore(&span.text))
            .filter_map(|span| {
                let expected = case.convert(&span.text);
                // a conversion that erases the identifier is never a fix
                if expected == span.text || expected.is_empty() {
                    None
                } else {
                    Some((span, expected))
                }
            })
            .collect()
    }

    fn should_ignore(&self, word: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern.is_match(word))
    }
}

/// Read a file as UTF-8 text; binary files are skipped
fn read_text(file_path: &Path) -> Result<Option<String>> {
    let bytes = fs::read(file_path)
        .with_context(|| format!("Failed to read file: {}", file_path.display()))?;

    match String::from_utf8(bytes) {
        Ok(content) => Ok(Some(content)),
        Err(_) => {
            log::warn!("Skipping non-UTF-8 file: {}", file_path.display());
            Ok(None)
        }
    }
}

fn empty_result(file_path: &Path) -> CheckResult {
    CheckResult {
        path: file_path.to_path_buf(),
        ..Default::default()
    }
}
