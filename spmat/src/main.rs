use clap::{Parser, Subcommand};
use spmat::{LoadError, MatrixFile, Operation, ParseConfig, SparseMatrix, SparseStorage};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "SPMAT - Add, subtract and multiply sparse integer matrix files")]
struct Cli {
    /// Accept entries outside the declared rows/cols
    #[arg(long, global = true)]
    lenient: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print A + B
    Add {
        /// Left operand file
        a: PathBuf,
        /// Right operand file
        b: PathBuf,
    },
    /// Print A - B
    Sub {
        /// Left operand file
        a: PathBuf,
        /// Right operand file
        b: PathBuf,
    },
    /// Print A * B
    Mul {
        /// Left operand file
        a: PathBuf,
        /// Right operand file
        b: PathBuf,
    },
    /// Print a single matrix
    Show {
        /// Matrix file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = if cli.lenient {
        ParseConfig::lenient()
    } else {
        ParseConfig::default()
    };

    match run(&cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &Commands, config: &ParseConfig) -> Result<(), LoadError> {
    match command {
        Commands::Add { a, b } => handle_binary(Operation::Addition, a, b, config),
        Commands::Sub { a, b } => handle_binary(Operation::Subtraction, a, b, config),
        Commands::Mul { a, b } => handle_binary(Operation::Multiplication, a, b, config),
        Commands::Show { file } => {
            let matrix: SparseMatrix = MatrixFile::read_matrix_with_config(file, config)?;
            let (rows, cols) = matrix.dimensions();
            println!("Matrix: {rows} x {cols}");
            println!("Non-zeros: {}", matrix.nnz());
            print_matrix(&matrix);
            Ok(())
        }
    }
}

fn handle_binary(
    operation: Operation,
    a_path: &Path,
    b_path: &Path,
    config: &ParseConfig,
) -> Result<(), LoadError> {
    let a: SparseMatrix = MatrixFile::read_matrix_with_config(a_path, config)?;
    let b: SparseMatrix = MatrixFile::read_matrix_with_config(b_path, config)?;

    println!("Matrix A: {} x {}", a.rows(), a.cols());
    println!("Matrix B: {} x {}", b.rows(), b.cols());

    let result = match operation {
        Operation::Addition => a.add(&b)?,
        Operation::Subtraction => a.subtract(&b)?,
        Operation::Multiplication => a.multiply(&b)?,
    };

    println!("Result of A {} B:", operation.symbol());
    print_matrix(&result);
    Ok(())
}

fn print_matrix(matrix: &SparseMatrix) {
    for line in matrix.render() {
        println!("{line}");
    }
}
