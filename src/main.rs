//! CLI entry point for koan.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

use koan::arith::CountedArith;
use koan::doc_check::{DocCheck, FnMeta};
use koan::fib::Fibonacci;
use koan::readme_gate;
use koan::ui;

#[derive(Parser)]
#[command(name = "koan")]
#[command(version)]
#[command(about = "Closure and wrapper exercises", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the opening values of the Fibonacci sequence
    Fib {
        /// How many values to generate
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Emit the values as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Run one counted arithmetic operation
    Calc {
        /// Operation to run: add, mul or div
        op: String,
        /// Left operand
        a: f64,
        /// Right operand
        b: f64,
        /// Emit the result and counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report on a function's documentation length
    DocCheck {
        /// Function name to report on
        #[arg(long)]
        name: String,
        /// Documentation text attached to the function
        #[arg(long)]
        doc: Option<String>,
        /// Minimum length threshold in characters
        #[arg(long, default_value_t = koan::doc_check::DEFAULT_MIN_LENGTH)]
        threshold: usize,
    },
    /// Validate a README against the documentation gate
    Readme {
        /// Path to the README file
        #[arg(default_value = "README.md")]
        path: PathBuf,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show version and build information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red(), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fib { count, json } => cmd_fib(count, json),
        Commands::Calc { op, a, b, json } => cmd_calc(&op, a, b, json),
        Commands::DocCheck {
            name,
            doc,
            threshold,
        } => cmd_doc_check(name, doc, threshold),
        Commands::Readme { path, json } => cmd_readme(&path, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    }
}

fn cmd_fib(count: usize, json: bool) -> Result<()> {
    let mut generator = Fibonacci::new();
    let values: Vec<String> = generator
        .take_values(count)
        .iter()
        .map(|value| value.to_string())
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&values)?);
    } else {
        for (index, value) in values.iter().enumerate() {
            println!("{:>5}  {}", ui::colors::secondary(&index.to_string()), value);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CalcOutput {
    op: String,
    a: f64,
    b: f64,
    result: f64,
    counts: std::collections::HashMap<String, u64>,
}

fn cmd_calc(op: &str, a: f64, b: f64, json: bool) -> Result<()> {
    let ops = CountedArith::new();
    let result = match op {
        "add" => ops.add(a, b),
        "mul" => ops.mul(a, b),
        "div" => ops.div(a, b),
        other => bail!("unknown operation '{}': expected add, mul or div", other),
    };

    if json {
        let output = CalcOutput {
            op: op.to_string(),
            a,
            b,
            result,
            counts: ops.counts(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}({}, {}) = {}", ui::colors::identifier(op), a, b, result);
    if !ui::is_quiet() {
        println!("{}", ui::colors::secondary(&ui::format::separator(24)));
        let mut entries: Vec<(String, u64)> = ops.counts().into_iter().collect();
        entries.sort();
        for (name, n) in entries {
            println!("  {:<4} {}", name, n);
        }
    }
    Ok(())
}

fn cmd_doc_check(name: String, doc: Option<String>, threshold: usize) -> Result<()> {
    let check = DocCheck::with_threshold(threshold);
    let mut func = FnMeta::new(name);
    if let Some(doc) = doc {
        func = func.with_doc(doc);
    }
    println!("{}", check.report(&func));
    Ok(())
}

fn cmd_readme(path: &Path, json: bool) -> Result<()> {
    let report = readme_gate::check_readme(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", ui::colors::heading(&path.display().to_string()));
        report.display();
    }

    if !report.is_satisfied() {
        process::exit(1);
    }
    Ok(())
}

fn cmd_version() {
    const GIT_SHA: &str = env!("GIT_SHA");
    const BUILD_DATE: &str = env!("BUILD_DATE");
    println!("koan {}", env!("CARGO_PKG_VERSION"));
    println!("commit: {}", GIT_SHA);
    println!("built: {}", BUILD_DATE);
}
