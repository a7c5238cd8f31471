//! Runs the individual stages of a check: the full-coverage verdict and the
//! witness queries.
//!
//! Every path a strategy returns is re-verified here before it is reported,
//! so a faulty witness chain surfaces as an error instead of a wrong answer.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::connectivity::{CheckError, CheckOutcome, Checker, NotFoundReason, PathLookup};
use crate::numbers::Value;

/// Result of one witness query that passed input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryReport {
    pub a: Value,
    pub b: Value,
    pub lookup: PathLookup,
    /// Meeting value of the verified path, if one was found.
    pub meeting: Option<Value>,
}

/// Runs the strategy's global check and logs the verdict.
///
/// # Returns
/// The strategy's outcome on success, or the `CheckError` it raised
/// (a `Disconnected` verdict for the union-find strategy).
pub fn run_coverage_check(
    checker: &mut Checker,
    quiet_mode: bool,
) -> Result<CheckOutcome, CheckError> {
    verbose_println!(
        quiet_mode,
        "\n[STEP 1] Checking coverage of [1, {}] ({:?}, {:?} terms)...",
        checker.max_n(),
        checker.strategy(),
        checker.domain()
    );

    let outcome = checker.run_check();
    match &outcome {
        Ok(CheckOutcome::Verified { max_n }) => {
            verbose_println!(quiet_mode, "   => All of [1, {}] forms a single class.", max_n);
        }
        Ok(CheckOutcome::Deferred) => {
            verbose_println!(
                quiet_mode,
                "   => Strategy performs no global check; connectivity is tested per query."
            );
        }
        Err(e) => {
            verbose_eprintln!(quiet_mode, "   => {}", e);
            if let Some(classes) = checker.classes() {
                verbose_println!(quiet_mode, "   => The range splits into {} classes:", classes.len());
                for class in &classes {
                    verbose_println!(quiet_mode, "      {:?}", class);
                }
            }
        }
    }
    outcome
}

/// Looks up and verifies the witness path for a single pair.
///
/// # Errors
/// - `AppError::Check` if an endpoint lies outside the checker's bound.
/// - `AppError::Path` if the returned chain does not prove the pair.
pub fn process_query(
    checker: &mut Checker,
    a: Value,
    b: Value,
    quiet_mode: bool,
) -> Result<QueryReport, AppError> {
    let lookup = checker.get_path(a, b)?;

    let meeting = match lookup.path() {
        Some(path) => Some(path.verify(checker.max_n(), checker.domain())?),
        None => None,
    };

    let report = QueryReport {
        a,
        b,
        lookup,
        meeting,
    };
    verbose_println!(quiet_mode, "   {}", describe_query(&report));
    Ok(report)
}

/// One-line, human-readable rendering of a query outcome.
pub fn describe_query(report: &QueryReport) -> String {
    match (&report.lookup, report.meeting) {
        (PathLookup::Found(path), meeting) => format!(
            "({}, {}) meet at {}: {}",
            report.a,
            report.b,
            meeting.unwrap_or_else(|| path.meeting_value()),
            path
        ),
        (PathLookup::NotFound(NotFoundReason::SeparateClasses), _) => {
            format!("({}, {}) lie in different classes", report.a, report.b)
        }
        (PathLookup::NotFound(NotFoundReason::NoMeetingPoint), _) => format!(
            "({}, {}) have no meeting point within the bound",
            report.a, report.b
        ),
    }
}
