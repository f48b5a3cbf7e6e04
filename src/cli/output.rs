use crate::case::Case;
use crate::CheckResult;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonConversion<'a> {
    input: &'a str,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonCheckOutput<'a> {
    files_checked: usize,
    total_errors: usize,
    total_fixed: usize,
    results: Vec<&'a CheckResult>,
}

#[derive(Debug, Serialize)]
struct JsonInspection<'a> {
    input: &'a str,
    matches: Vec<Case>,
    conversions: Vec<JsonCaseOutput<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonCaseOutput<'a> {
    case: Case,
    output: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonCase {
    name: Case,
    example: &'static str,
}

/// Print converted inputs, one per line in text mode
pub fn print_conversions(conversions: &[(String, String)], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (_, output) in conversions {
                println!("{}", output);
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonConversion> = conversions
                .iter()
                .map(|(input, output)| JsonConversion { input, output })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

pub fn print_results(
    results: &[CheckResult],
    colored_output: bool,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                print_text_violations(&result.path, result, colored_output);
            }
        }
        OutputFormat::Json => {
            let output = JsonCheckOutput {
                files_checked: results.len(),
                total_errors: results.iter().map(|r| r.error_count).sum(),
                total_fixed: results.iter().map(|r| r.fixed_count).sum(),
                results: results.iter().collect(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn print_text_violations(file_path: &Path, result: &CheckResult, colored_output: bool) {
    if result.violations.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for violation in &result.violations {
        let line_info = format!("{}:{}", violation.line, violation.column);

        if colored_output {
            println!(
                "  {} {} {} {}",
                line_info.blue().bold(),
                violation.identifier.red().bold(),
                "→".dimmed(),
                violation.expected.green()
            );
            println!(
                "    {}",
                format_context(&violation.context, &violation.identifier, colored_output)
            );
        } else {
            println!(
                "  {} {} → {}",
                line_info, violation.identifier, violation.expected
            );
            println!("    {}", violation.context);
        }
    }
}

fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

pub fn print_check_summary(total_errors: usize, files_checked: usize, colored: bool) {
    let file_word = if files_checked == 1 { "file" } else { "files" };

    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ All identifiers follow the convention!".green().bold());
        } else {
            println!("✓ All identifiers follow the convention!");
        }
    } else {
        let error_word = if total_errors == 1 {
            "identifier"
        } else {
            "identifiers"
        };
        if colored {
            println!(
                "{} {} {} to rename in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files_checked,
                file_word
            );
        } else {
            println!(
                "✗ {} {} to rename in {} {}",
                total_errors, error_word, files_checked, file_word
            );
        }
    }
}

pub fn print_fix_summary(total_fixed: usize, files_checked: usize, colored: bool) {
    let file_word = if files_checked == 1 { "file" } else { "files" };

    println!();
    if total_fixed == 0 {
        if colored {
            println!("{}", "No renames needed!".green().bold());
        } else {
            println!("No renames needed!");
        }
    } else {
        let fix_word = if total_fixed == 1 { "rename" } else { "renames" };
        if colored {
            println!(
                "{} {} {} applied to {} {}",
                "✓".green().bold(),
                total_fixed.to_string().green().bold(),
                fix_word,
                files_checked,
                file_word
            );
        } else {
            println!(
                "✓ {} {} applied to {} {}",
                total_fixed, fix_word, files_checked, file_word
            );
        }
    }
}

/// List the supported conventions with an example each
pub fn print_cases(colored: bool, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for case in Case::ALL {
                if colored {
                    println!("  {:<8} {}", case.to_string().cyan().bold(), case.example());
                } else {
                    println!("  {:<8} {}", case, case.example());
                }
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonCase> = Case::ALL
                .into_iter()
                .map(|case| JsonCase {
                    name: case,
                    example: case.example(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Show every conversion of each input and the conventions it already matches
pub fn print_inspection(inputs: &[String], colored: bool, format: &OutputFormat) -> Result<()> {
    let converted: Vec<Vec<(Case, String)>> = inputs
        .iter()
        .map(|input| Case::ALL.into_iter().map(|c| (c, c.convert(input))).collect())
        .collect();

    match format {
        OutputFormat::Text => {
            for (input, conversions) in inputs.iter().zip(&converted) {
                let matches: Vec<String> = Case::matching(input).map(|c| c.to_string()).collect();
                let matches = if matches.is_empty() {
                    "none".to_string()
                } else {
                    matches.join(", ")
                };

                if colored {
                    println!("\n{} ({} {})", input.bold(), "matches:".dimmed(), matches);
                } else {
                    println!("\n{} (matches: {})", input, matches);
                }
                for (case, output) in conversions {
                    if colored {
                        println!("  {:<8} {}", case.to_string().cyan(), output);
                    } else {
                        println!("  {:<8} {}", case, output);
                    }
                }
            }
        }
        OutputFormat::Json => {
            let json: Vec<JsonInspection> = inputs
                .iter()
                .zip(&converted)
                .map(|(input, conversions)| JsonInspection {
                    input,
                    matches: Case::matching(input).collect(),
                    conversions: conversions
                        .iter()
                        .map(|(case, output)| JsonCaseOutput {
                            case: *case,
                            output,
                        })
                        .collect(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_format_context() {
        assert_eq!(format_context("let fooBar = 1", "fooBar", false), "let fooBar = 1");
    }
}
