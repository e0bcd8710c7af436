//! Colorful console output for tripart runs.
//!
//! Provides a custom `tracing` layer that renders the structured events
//! emitted by the tripart crates.
//!
//! ## Log Levels
//!
//! - **INFO**: Index and model sizes, search start/end, solutions, files
//! - **WARN**: Stall warnings
//! - **DEBUG**: Per-worker results

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing. `RUST_LOG` overrides the default
/// `tripart_solver=info` filter.
pub fn init() {
    init_with_verbosity(false);
}

/// Like [`init`], with `verbose` lowering the solver default to `debug` so
/// per-worker results show up.
pub fn init_with_verbosity(verbose: bool) {
    INIT.get_or_init(|| {
        print_banner();

        let solver_directive = if verbose {
            "tripart_solver=debug"
        } else {
            "tripart_solver=info"
        };
        let filter = EnvFilter::builder()
            .with_default_directive(default_directive(solver_directive))
            .from_env_lossy()
            .add_directive(default_directive("tripart_model=info"))
            .add_directive(default_directive("tripart_solution=info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TripartConsoleLayer)
            .try_init();
    });
}

fn default_directive(directive: &str) -> Directive {
    directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into())
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _        _                  _
| |_ _ __(_)_ __   __ _ _ __| |_
| __| '__| | '_ \ / _` | '__| __|
| |_| |  | | |_) | (_| | |  | |_
 \__|_|  |_| .__/ \__,_|_|   \__|
           |_|
"#;

    let version_line = format!("          v{} - Triple Partition Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats tripart events with colors.
pub struct TripartConsoleLayer;

impl<S: Subscriber> Layer<S> for TripartConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("tripart") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    status: Option<String>,
    path: Option<String>,
    backend: Option<String>,
    outcome: Option<String>,
    group_size: Option<u64>,
    element_count: Option<u64>,
    pair_count: Option<u64>,
    triple_count: Option<u64>,
    admissible_count: Option<u64>,
    coverage_key_count: Option<u64>,
    variable_count: Option<u64>,
    constraint_count: Option<u64>,
    fixed_count: Option<u64>,
    worker_count: Option<u64>,
    worker: Option<u64>,
    solution_count: Option<u64>,
    elapsed_ms: Option<u64>,
    duration_ms: Option<u64>,
    node_count: Option<u64>,
    backtrack_count: Option<u64>,
    stall_secs: Option<u64>,
    threshold_secs: Option<u64>,
    issue_count: Option<u64>,
    time_limit_secs: Option<f64>,
    valid: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value).trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "status" => self.status = Some(s),
            "path" => self.path = Some(s),
            "backend" => self.backend = Some(s),
            "outcome" => self.outcome = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "group_size" => self.group_size = Some(value),
            "element_count" => self.element_count = Some(value),
            "pair_count" => self.pair_count = Some(value),
            "triple_count" => self.triple_count = Some(value),
            "admissible_count" => self.admissible_count = Some(value),
            "coverage_key_count" => self.coverage_key_count = Some(value),
            "variable_count" => self.variable_count = Some(value),
            "constraint_count" => self.constraint_count = Some(value),
            "fixed_count" => self.fixed_count = Some(value),
            "worker_count" => self.worker_count = Some(value),
            "worker" | "winning_worker" => self.worker = Some(value),
            "solution_count" => self.solution_count = Some(value),
            "elapsed_ms" => self.elapsed_ms = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "node_count" => self.node_count = Some(value),
            "backtrack_count" => self.backtrack_count = Some(value),
            "stall_secs" => self.stall_secs = Some(value),
            "threshold_secs" => self.threshold_secs = Some(value),
            "issue_count" => self.issue_count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "time_limit_secs" {
            self.time_limit_secs = Some(value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "valid" {
            self.valid = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "status" => self.status = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            "backend" => self.backend = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "index_built" => format_index_built(v),
        "incidence_built" => format_incidence_built(v),
        "model_built" => format_model_built(v),
        "solve_start" => format_solve_start(v),
        "solution_found" => format_solution_found(v),
        "stall" => format_stall(v),
        "worker_end" if level >= Level::DEBUG => format_worker_end(v),
        "solve_end" => format_solve_end(v),
        "solution_written" => format_solution_written(v),
        "validation_end" => format_validation_end(v),
        _ => String::new(),
    }
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_index_built(v: &EventVisitor) -> String {
    format!(
        "{} {} Universe │ g={} │ y={} │ {} pairs │ {} triples",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.group_size).bright_yellow(),
        count(v.element_count).bright_yellow(),
        count(v.pair_count).bright_yellow(),
        count(v.triple_count).bright_yellow(),
    )
}

fn format_incidence_built(v: &EventVisitor) -> String {
    format!(
        "{} {} Incidence │ {} admissible │ {} coverage keys",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.admissible_count).bright_yellow(),
        count(v.coverage_key_count).bright_yellow(),
    )
}

fn format_model_built(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Model │ {} variables │ {} constraints",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.variable_count).bright_yellow(),
        count(v.constraint_count).bright_yellow(),
    );
    if v.fixed_count.unwrap_or(0) > 0 {
        output.push_str(&format!(" │ {} fixed", count(v.fixed_count).bright_yellow()));
    }
    output
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let variables = v.variable_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Solving │ {} │ {} workers │ scale {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        v.backend.as_deref().unwrap_or("backend").white().bold(),
        count(v.worker_count).bright_yellow(),
        calculate_problem_scale(variables as usize).bright_magenta()
    );

    if let Some(limit) = v.time_limit_secs {
        output.push_str(&format!(" │ {}s limit", format!("{}", limit).bright_yellow()));
    }

    output
}

fn format_solution_found(v: &EventVisitor) -> String {
    format!(
        "{} {} Solution #{} │ worker {} │ {}",
        format_elapsed(),
        "★".bright_green().bold(),
        count(v.solution_count).bright_green(),
        count(v.worker).white(),
        format_duration_ms(v.elapsed_ms.unwrap_or(0)).yellow(),
    )
}

fn format_stall(v: &EventVisitor) -> String {
    format!(
        "{} {} No solution for {}s (threshold {}s)",
        format_elapsed(),
        "⚠".bright_yellow().bold(),
        count(v.stall_secs).bright_yellow(),
        count(v.threshold_secs),
    )
}

fn format_worker_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Worker {:>3} │ {} │ {} nodes │ {} backtracks",
        format_elapsed(),
        "·".bright_black(),
        count(v.worker),
        v.outcome.as_deref().unwrap_or("?"),
        count(v.node_count).bright_black(),
        count(v.backtrack_count).bright_black(),
    )
}

fn format_status(status: &str) -> String {
    match status {
        "OPTIMAL" | "FEASIBLE" => status.bright_green().bold().to_string(),
        "INFEASIBLE" => status.bright_red().bold().to_string(),
        _ => status.bright_yellow().bold().to_string(),
    }
}

fn format_solve_end(v: &EventVisitor) -> String {
    let status = v.status.as_deref().unwrap_or("UNKNOWN");
    let duration = v.duration_ms.unwrap_or(0);
    let nodes = v.node_count.unwrap_or(0);
    let speed = if duration == 0 {
        nodes
    } else {
        nodes.saturating_mul(1000) / duration
    };

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} │ {} nodes │ {} nodes/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_status(status),
        format_duration_ms(duration).yellow(),
        nodes.to_formatted_string(&Locale::en).white(),
        speed
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
    );

    // Summary box
    let status_text = match status {
        "OPTIMAL" | "FEASIBLE" => "PARTITION FOUND",
        "INFEASIBLE" => "INFEASIBLE (search space exhausted)",
        "TIME_LIMIT_NO_SOLUTION" => "TIME LIMIT REACHED (no solution)",
        _ => status,
    };
    let inner_width: usize = 58;
    let total_pad = inner_width.saturating_sub(status_text.len());
    let left_pad = total_pad / 2;
    let right_pad = total_pad - left_pad;

    output.push_str("\n\n");
    output.push_str(
        &"╔══════════════════════════════════════════════════════════╗"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        format_status_text(status, status_text),
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(
        &"╚══════════════════════════════════════════════════════════╝"
            .bright_cyan()
            .to_string(),
    );
    output.push('\n');

    output
}

fn format_status_text(status: &str, text: &str) -> String {
    match status {
        "OPTIMAL" | "FEASIBLE" => text.bright_green().bold().to_string(),
        "INFEASIBLE" => text.bright_red().bold().to_string(),
        _ => text.bright_yellow().bold().to_string(),
    }
}

fn format_solution_written(v: &EventVisitor) -> String {
    format!(
        "{} {} Wrote {}",
        format_elapsed(),
        "✓".bright_green(),
        v.path.as_deref().unwrap_or("?").white().bold(),
    )
}

fn format_validation_end(v: &EventVisitor) -> String {
    if v.valid.unwrap_or(false) {
        format!(
            "{} {} Validation passed",
            format_elapsed(),
            "✓".bright_green()
        )
    } else {
        format!(
            "{} {} Validation failed │ {} issues",
            format_elapsed(),
            "✗".bright_red(),
            count(v.issue_count).bright_red(),
        )
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

/// Size of the raw search space, `2^variables`, as `m x 10^e`.
fn calculate_problem_scale(variable_count: usize) -> String {
    if variable_count == 0 {
        return "1".to_string();
    }

    let log_scale = (variable_count as f64) * 2f64.log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
