use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sparsemat::{read_matrix_file, write_matrix_file, BoundsPolicy, Operation, ParseOptions, SparseMatrix};

#[derive(Parser)]
#[command(name = "sparsemat")]
#[command(about = "Add, subtract or multiply two sparse matrix files")]
#[command(version)]
#[command(after_help = "Example: sparsemat add matrix1.txt matrix2.txt result.txt")]
struct Cli {
    /// Operation to perform: add, subtract or multiply
    operation: Operation,

    /// First (left) matrix file
    matrix1: PathBuf,

    /// Second (right) matrix file
    matrix2: PathBuf,

    /// File the result is written to
    output: PathBuf,

    /// Handling of entries outside the declared dimensions: ignore, skip or reject
    #[arg(long, default_value_t = BoundsPolicy::Ignore)]
    bounds: BoundsPolicy,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = ParseOptions::with_bounds(cli.bounds);
    let matrix1: SparseMatrix<i64> = read_matrix_file(&cli.matrix1, &options)?;
    let matrix2: SparseMatrix<i64> = read_matrix_file(&cli.matrix2, &options)?;

    println!(
        "Performing operation: {} {} {}",
        matrix1.dimension_string(),
        cli.operation,
        matrix2.dimension_string()
    );

    let result = cli.operation.apply(&matrix1, &matrix2)?;
    write_matrix_file(&cli.output, &result)?;

    println!(
        "Operation \"{}\" completed successfully. Result written to: {}",
        cli.operation,
        cli.output.display()
    );

    Ok(())
}

/// Installs a stderr subscriber; `RUST_LOG` wins over `-v` when set
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sparsemat={default_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
