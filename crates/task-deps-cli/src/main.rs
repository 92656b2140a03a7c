//! task-deps CLI Application
//!
//! Validates a proposed dependency list for a task against the existing
//! task snapshots and exits with 0 (accepted), 1 (rejected) or 2 (usage or
//! input error).

// CLI binary needs to output to stdout/stderr - this is intentional
#![allow(clippy::print_stderr)]

use clap::Parser;
use std::io::{self, Write};
use task_deps_cli::cli::{self, Cli, render_error, render_verdict};
use task_deps_cli::commands;
use task_deps_cli::tracing::{TracingConfig, init_tracing};

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    let tracing_config = TracingConfig {
        format: cli.log_format,
        level: cli.level.into(),
        filter: cli.log_filter.clone(),
    };

    let result = init_tracing(&tracing_config).and_then(|()| commands::execute(&cli.command));

    let (rendered, code) = match result {
        Ok(verdict) => (
            render_verdict(&verdict, cli.output, &mut stdout, &mut stderr),
            verdict.exit_code(),
        ),
        Err(err) => (
            render_error(&err, cli.output, &mut stdout, &mut stderr),
            cli::exit_code_for(&err),
        ),
    };

    if let Err(e) = rendered.and_then(|()| stdout.flush()) {
        eprintln!("Failed to write output: {e}");
        return cli::EXIT_CLI;
    }
    code
}
