use std::{fs, path::PathBuf, process};

use clap::Parser;
use symrun::run_source;

/// symrun explores every control-flow path of a function symbolically and
/// reports each path's bindings, condition and return expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The source file containing the function to execute.
    input: PathBuf,

    /// The file the per-path report is written to.
    output: PathBuf,
}

fn main() {
    let args = Args::parse();

    let source = fs::read_to_string(&args.input).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  args.input.display());
        process::exit(1);
    });

    let report = run_source(&source).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if let Err(e) = fs::write(&args.output, report) {
        eprintln!("Failed to write the output file '{}': {e}", args.output.display());
        process::exit(1);
    }
}
