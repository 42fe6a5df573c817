use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dokmat::{read_matrix, write_matrix, MatrixConfig, MultiplyStrategy, Operation, SparseMatrix};

/// Add, subtract or multiply two sparse integer matrices stored as text.
///
/// Arguments that are not given on the command line are asked for on stdin.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Operation to perform: add, subtract or multiply
    operation: Option<String>,

    /// Path to the first matrix file
    first: Option<PathBuf>,

    /// Path to the second matrix file
    second: Option<PathBuf>,

    /// Multiplication strategy: column-sweep or row-indexed
    #[arg(long, default_value_t = MultiplyStrategy::ColumnSweep)]
    strategy: MultiplyStrategy,

    /// Write the result to this file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let operation = match cli.operation {
        Some(operation) => operation,
        None => {
            println!("Select matrix operation: add, subtract, multiply");
            prompt("Enter operation: ")?
        }
    };
    let first = match cli.first {
        Some(path) => path,
        None => PathBuf::from(prompt("Enter path to first matrix file: ")?),
    };
    let second = match cli.second {
        Some(path) => path,
        None => PathBuf::from(prompt("Enter path to second matrix file: ")?),
    };

    let a: SparseMatrix = read_matrix(&first)?;
    let b: SparseMatrix = read_matrix(&second)?;
    let operation: Operation = operation.parse()?;

    let config = MatrixConfig::with_strategy(cli.strategy);
    let result = operation.apply_with_config(&a, &b, &config)?;

    match cli.output {
        Some(path) => {
            write_matrix(&path, &result)?;
            log::info!("{} result written to {}", operation, path.display());
        }
        None => {
            println!("\nResult Matrix:");
            println!("{result}");
        }
    }

    Ok(())
}

/// Print `message` and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line.trim().to_string())
}
