use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use owo_colors::OwoColorize;
use tripart::{
    format_runtime, render_solution, run_solver, solution_file_name, validate_file,
    ExactCoverBackend, SolveStatus, SolverConfig, ValidationReport,
};

use crate::error::CliError;
use crate::{SolveArgs, ValidateArgs, EXIT_NO_SOLUTION};

pub fn solve(args: &SolveArgs) -> Result<ExitCode, CliError> {
    let config = build_config(args)?;
    let outcome = run_solver(args.g, &config, &ExactCoverBackend::new())?;

    println!("Status: {}", format_status(outcome.status));
    println!("Total runtime: {}", format_runtime(outcome.elapsed));

    let (Some(solution), Some(path)) = (&outcome.solution, &outcome.path) else {
        println!("No solution found.");
        return Ok(ExitCode::from(EXIT_NO_SOLUTION));
    };

    if args.print_solution {
        print!("{}", render_solution(solution));
    }
    println!("Solution written to {}", path.display().bold());

    if args.validate {
        let report = validate_file(args.g, path)?;
        return Ok(print_report(&report));
    }
    Ok(ExitCode::SUCCESS)
}

pub fn validate(args: &ValidateArgs) -> Result<ExitCode, CliError> {
    let path = args
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(solution_file_name(args.g)));
    let report = validate_file(args.g, &path)?;
    Ok(print_report(&report))
}

/// Config file values first, then flags on top.
fn build_config(args: &SolveArgs) -> Result<SolverConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SolverConfig::default(),
    };

    if let Some(seconds) = args.time_limit {
        config = config.with_time_limit_seconds(seconds);
    }
    if let Some(seconds) = args.stall_threshold {
        config = config.with_stall_threshold_seconds(seconds);
    }
    if let Some(workers) = args.workers {
        config = config.with_worker_count(workers);
    }
    if let Some(seed) = args.seed {
        config = config.with_random_seed(seed);
    }
    if let Some(strategy) = args.strategy {
        config = config.with_search_strategy(strategy.into());
    }
    if args.no_symmetry_breaking {
        config = config.without_symmetry_breaking();
    }
    if let Some(dir) = &args.output_dir {
        config = config.with_output_dir(dir);
    }
    if args.verbose {
        config.log_search_progress = true;
    }

    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<SolverConfig, CliError> {
    let config = match path.extension().and_then(OsStr::to_str) {
        Some("yaml" | "yml") => SolverConfig::from_yaml_file(path)?,
        _ => SolverConfig::from_toml_file(path)?,
    };
    Ok(config)
}

fn format_status(status: SolveStatus) -> String {
    if status.has_solution() {
        status.bright_green().bold().to_string()
    } else {
        status.bright_red().bold().to_string()
    }
}

fn print_report(report: &ValidationReport) -> ExitCode {
    if report.is_valid() {
        println!("{}", report.green());
        ExitCode::SUCCESS
    } else {
        println!("{}", report);
        ExitCode::FAILURE
    }
}
