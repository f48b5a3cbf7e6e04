use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::{Case, CaseChecker, Config};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert and check naming conventions", long_about = None)]
struct Cli {
    /// Strings to convert, or files and directories with --check/--fix
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target case (dot, camel, kebab, snake, pascal, train)
    #[arg(short, long, env = "RECASE_TO")]
    to: Option<Case>,

    /// Read strings to convert from stdin, one per line
    #[arg(long, conflicts_with_all = ["check", "fix"])]
    stdin: bool,

    /// Report identifiers in files that do not follow the target case
    #[arg(short, long)]
    check: bool,

    /// Rename non-conforming identifiers in place
    #[arg(long, conflicts_with = "check")]
    fix: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if violations are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Identifiers matching this pattern are skipped (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// List supported naming conventions
    List,
    /// Show every conversion of the given strings
    Inspect {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let colored = !cli.no_color;

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    // Handle subcommands
    if let Some(command) = cli.command {
        return match command {
            Commands::List => output::print_cases(colored, &cli.format),
            Commands::Inspect { inputs } => output::print_inspection(&inputs, colored, &cli.format),
        };
    }

    // Load configuration
    let config = Config::load(cli.to, cli.ignore_pattern.clone())?;
    let case = config.default_case;

    if cli.check || cli.fix {
        let paths = existing_paths(&cli.inputs)?;
        let checker = CaseChecker::new(&config)?;
        let results = checker.check_paths(&paths, case, cli.fix)?;

        let total_errors: usize = results.iter().map(|r| r.error_count).sum();
        let total_fixed: usize = results.iter().map(|r| r.fixed_count).sum();

        output::print_results(&results, colored, &cli.format)?;
        if cli.format == OutputFormat::Text {
            if cli.fix {
                output::print_fix_summary(total_fixed, results.len(), colored);
            } else {
                output::print_check_summary(total_errors, results.len(), colored);
            }
        }

        // Exit with appropriate code
        if total_errors > 0 && !cli.no_fail {
            std::process::exit(1);
        }
        return Ok(());
    }

    let inputs = if cli.stdin {
        read_stdin_lines()?
    } else if cli.inputs.is_empty() {
        anyhow::bail!("No input specified. Use --help for usage information.");
    } else {
        cli.inputs
    };

    let conversions: Vec<(String, String)> = inputs
        .into_iter()
        .map(|input| {
            let converted = case.convert(&input);
            (input, converted)
        })
        .collect();

    output::print_conversions(&conversions, &cli.format)
}

fn existing_paths(inputs: &[String]) -> Result<Vec<PathBuf>> {
    if inputs.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let mut paths = Vec::new();
    for input in inputs {
        let path = PathBuf::from(input);
        if !path.exists() {
            log::warn!("Skipping missing path: {}", path.display());
            continue;
        }
        paths.push(path);
    }

    if paths.is_empty() {
        anyhow::bail!("None of the given paths exist.");
    }
    Ok(paths)
}

fn read_stdin_lines() -> Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read from stdin")
}
