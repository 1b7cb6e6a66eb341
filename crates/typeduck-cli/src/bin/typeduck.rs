#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::Path;

use typeduck::{DuckError, TypeDuck, parse_type_expr};
use typeduck_cli::args::{CliArgs, Command, OutputFormat};
use typeduck_cli::batch::{self, BatchSummary};
use typeduck_cli::reporter::{BatchReport, CheckReport, NormalizeReport, Reporter};
use typeduck_lowering::lower_type_expr;

/// Exit status codes.
const EXIT_COMPATIBLE: i32 = 0;
const EXIT_INCOMPATIBLE: i32 = 1;
const EXIT_MALFORMED: i32 = 2;

fn main() -> Result<()> {
    // Only installs a subscriber when TYPEDUCK_LOG or RUST_LOG is set.
    typeduck_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let reporter = Reporter::new(!args.no_color && std::io::stdout().is_terminal());

    let code = match &args.command {
        Command::Check {
            source,
            target,
            strict,
            format,
        } => check(&reporter, source, target, *strict, *format)?,
        Command::Normalize { expr, format } => normalize(&reporter, expr, *format)?,
        Command::Batch { file, format } => run_batch(&reporter, file, *format)?,
    };
    std::process::exit(code);
}

fn malformed(reporter: &Reporter, message: &str) -> i32 {
    eprintln!("{}", reporter.error(message));
    EXIT_MALFORMED
}

fn check(
    reporter: &Reporter,
    source: &str,
    target: &str,
    strict: bool,
    format: OutputFormat,
) -> Result<i32> {
    let duck = match TypeDuck::parse(source, target) {
        Ok(duck) => duck,
        Err(err) => return Ok(malformed(reporter, &err.to_string())),
    };
    let (compatible, reason) = match duck.validate(strict) {
        Ok(compatible) => (compatible, None),
        Err(DuckError::Incompatible { reason, .. }) => (false, Some(reason)),
        Err(err) => return Ok(malformed(reporter, &err.to_string())),
    };

    match format {
        OutputFormat::Text => println!(
            "{}",
            reporter.check(duck.source(), duck.target(), compatible, reason.as_ref())
        ),
        OutputFormat::Json => {
            let report = CheckReport {
                source: duck.source().to_string(),
                target: duck.target().to_string(),
                compatible,
                reason: reason.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(if compatible {
        EXIT_COMPATIBLE
    } else {
        EXIT_INCOMPATIBLE
    })
}

fn normalize(reporter: &Reporter, expr: &str, format: OutputFormat) -> Result<i32> {
    let lowered = parse_type_expr(expr)
        .map_err(DuckError::from)
        .and_then(|parsed| lower_type_expr(&parsed).map_err(DuckError::from));
    let descriptor = match lowered {
        Ok(descriptor) => descriptor,
        Err(err) => return Ok(malformed(reporter, &err.to_string())),
    };

    match format {
        OutputFormat::Text => println!("{}", reporter.normalize(&descriptor)),
        OutputFormat::Json => {
            let report = NormalizeReport {
                expr,
                rendered: descriptor.to_string(),
                descriptor: &descriptor,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(EXIT_COMPATIBLE)
}

fn run_batch(reporter: &Reporter, file: &Path, format: OutputFormat) -> Result<i32> {
    let cases = match batch::load_cases(file) {
        Ok(cases) => cases,
        Err(err) => return Ok(malformed(reporter, &format!("{err:#}"))),
    };
    let outcomes = batch::run_batch(&cases);
    let summary = BatchSummary::from_outcomes(&outcomes);

    match format {
        OutputFormat::Text => println!("{}", reporter.batch(&outcomes, &summary)),
        OutputFormat::Json => {
            let report = BatchReport {
                summary,
                cases: &outcomes,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(if summary.errors > 0 {
        EXIT_MALFORMED
    } else if summary.unexpected > 0 {
        EXIT_INCOMPATIBLE
    } else {
        EXIT_COMPATIBLE
    })
}
