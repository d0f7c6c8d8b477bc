//! Notifier contract
//!
//! The notifier is the runner's only collaborator: an external object that
//! receives progress, result, and error callbacks. Every method has a no-op
//! default body, so implementors override only the notifications they care
//! about.

use std::fmt;

use tracing::{debug, error, info};

use crate::suite::score::format_score;
use crate::utils::SuiteError;

/// How a suite finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteStatus {
    /// All benchmarks completed without a fatal step error
    Success,
    /// The suite was present in the skip list and never ran
    Skipped,
}

impl fmt::Display for SuiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteStatus::Success => write!(f, "Success"),
            SuiteStatus::Skipped => write!(f, "Skipped"),
        }
    }
}

/// Callbacks the runner fires while driving suites
pub trait Notifier {
    /// A suite is about to begin (fires for skipped suites too)
    fn notify_start(&mut self, suite: &str) {
        let _ = suite;
    }

    /// A benchmark finished a measure step; on failure this fires with the
    /// suite name as a fallback identifier
    fn notify_step(&mut self, benchmark: &str) {
        let _ = benchmark;
    }

    /// A suite finished without a fatal error, or was skipped
    fn notify_result(&mut self, suite: &str, status: SuiteStatus) {
        let _ = (suite, status);
    }

    /// A setup, workload, or teardown step failed; the rest of the suite
    /// was abandoned
    fn notify_error(&mut self, suite: &str, error: &SuiteError) {
        let _ = (suite, error);
    }

    /// All suites have been processed; fires exactly once per run
    fn notify_score(&mut self, score: f64) {
        let _ = score;
    }
}

/// Notifier that forwards every callback to `tracing`
///
/// Useful as-is for services that already ship a subscriber, and as a
/// reference implementation of the contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_start(&mut self, suite: &str) {
        info!(suite, "suite starting");
    }

    fn notify_step(&mut self, benchmark: &str) {
        debug!(benchmark, "benchmark step complete");
    }

    fn notify_result(&mut self, suite: &str, status: SuiteStatus) {
        info!(suite, status = %status, "suite finished");
    }

    fn notify_error(&mut self, suite: &str, err: &SuiteError) {
        match err.step_error().detail() {
            Some(detail) => error!(suite, %err, detail, "suite aborted"),
            None => error!(suite, %err, "suite aborted"),
        }
    }

    fn notify_score(&mut self, score: f64) {
        info!(
            score = %format_score(score),
            version = crate::SUITE_VERSION,
            "all suites finished"
        );
    }
}
