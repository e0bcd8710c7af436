//! `tripart` binary.
//!
//! - `tripart solve <G>` builds and solves the model, writes `g{G}_solution.txt`
//! - `tripart validate <G>` checks a solution file against the universe

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use owo_colors::OwoColorize;
use tripart::SearchStrategy;

mod commands;
mod error;

use error::CliError;

/// Exit code when the search ends without a solution.
const EXIT_NO_SOLUTION: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "tripart", version)]
#[command(about = "Partition the 3-subsets of {0..3g+1} into groups indexed by omitted pairs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress the banner and progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve for group size G and write the solution file
    Solve(SolveArgs),
    /// Validate a solution file for group size G
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
struct SolveArgs {
    /// Group size g (the ground set has 3g+2 elements)
    g: usize,

    /// Configuration file (TOML, or YAML by extension)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Time limit in seconds, 0 for none
    #[arg(short, long, value_name = "SECS")]
    time_limit: Option<u64>,

    /// Seconds without a solution before a stall warning
    #[arg(long, value_name = "SECS")]
    stall_threshold: Option<u64>,

    /// Number of parallel workers
    #[arg(short, long, value_name = "N")]
    workers: Option<usize>,

    /// Seed for worker diversification
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Branching strategy
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Drop the fixed first group for pair (0, 1)
    #[arg(long)]
    no_symmetry_breaking: bool,

    /// Directory for the solution file
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Log per-worker search results
    #[arg(short, long)]
    verbose: bool,

    /// Print the solution file to stdout
    #[arg(long)]
    print_solution: bool,

    /// Validate the written file
    #[arg(long)]
    validate: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Group size g
    g: usize,

    /// Solution file, `g{G}_solution.txt` by default
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum StrategyArg {
    Automatic,
    FixedOrder,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Automatic => SearchStrategy::Automatic,
            StrategyArg::FixedOrder => SearchStrategy::FixedOrder,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if !cli.quiet {
        let verbose = matches!(&cli.command, Command::Solve(args) if args.verbose);
        tripart::console::init_with_verbosity(verbose);
    }

    let result = match &cli.command {
        Command::Solve(args) => commands::solve(args),
        Command::Validate(args) => commands::validate(args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", format_error(&err).bright_red());
            ExitCode::FAILURE
        }
    }
}

fn format_error(err: &CliError) -> String {
    match err {
        // Already phrased for the user.
        CliError::Solution(tripart::SolutionError::NotFound(_)) => err.to_string(),
        _ => format!("Error: {}", err),
    }
}
