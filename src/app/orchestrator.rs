//! Main application orchestrator.
//!
//! Coordinates one run of the checker:
//! 1. Initializes logging.
//! 2. Builds a `Checker` for the requested bound, strategy and term domain.
//! 3. Runs the global coverage check, delegating to `processing::run_coverage_check`.
//! 4. Answers every requested pair through `processing::process_query`, re-verifying
//!    each returned witness path. The verbose log is flushed after each stage.
//! 5. Prints a summary to stdout.
//!
//! A failed coverage check does not stop the queries, but it is returned as the
//! run's error once they are done.

use super::cli::Cli;
use super::error::AppError;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::connectivity::{CheckError, CheckOutcome, Checker};

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for an invalid bound, a `Disconnected` coverage verdict,
/// or a witness path that fails verification. Out-of-range queries are logged
/// and counted but do not abort the run.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Continue without file logging.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let mut checker = Checker::with_domain(cli.max_n, cli.strategy, cli.domain)?;

    verbose_println!(
        quiet_mode,
        "\n============================================================"
    );
    verbose_println!(quiet_mode, "Checking N = {}", checker.max_n());
    verbose_println!(
        quiet_mode,
        "============================================================"
    );

    let verdict = processing::run_coverage_check(&mut checker, quiet_mode);
    match &verdict {
        Ok(CheckOutcome::Verified { max_n }) => {
            println!("All numbers from 1 to {} can be painted in one color.", max_n);
        }
        Ok(CheckOutcome::Deferred) => {}
        Err(e) => eprintln!("{}", e),
    }
    flush_log(quiet_mode, "coverage check");

    let queries = cli.queries();
    let mut found = 0usize;
    let mut not_found = 0usize;
    let mut rejected = 0usize;

    if !queries.is_empty() {
        verbose_println!(
            quiet_mode,
            "\n[STEP 2] Answering {} witness quer{}...",
            queries.len(),
            if queries.len() == 1 { "y" } else { "ies" }
        );
    }

    for (a, b) in queries {
        match processing::process_query(&mut checker, a, b, quiet_mode) {
            Ok(report) => {
                if report.lookup.is_found() {
                    found += 1;
                } else {
                    not_found += 1;
                }
                if !quiet_mode {
                    println!("{}", processing::describe_query(&report));
                }
            }
            Err(AppError::Check(e @ CheckError::OutOfRange { .. })) => {
                rejected += 1;
                verbose_eprintln!(quiet_mode, "   Query ({}, {}) rejected: {}", a, b, e);
            }
            Err(e) => {
                flush_log(quiet_mode, "failed query");
                return Err(e);
            }
        }
    }

    if found + not_found + rejected > 0 {
        verbose_println!(
            quiet_mode,
            "\n   => {} found, {} without a path, {} rejected.",
            found,
            not_found,
            rejected
        );
    }
    flush_log(quiet_mode, "queries");

    if quiet_mode {
        println!("Done.");
    } else {
        println!(
            "\nCheck finished: {} path(s) found, {} without a path, {} rejected. See '{}' for verbose output.",
            found,
            not_found,
            rejected,
            cli.log_file.display()
        );
    }

    verdict?;
    Ok(())
}

/// Flushes the verbose log, reporting failures on stderr since the log itself may be broken.
fn flush_log(quiet_mode: bool, stage: &str) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to flush the log after {}: {}", stage, e);
    }
}
