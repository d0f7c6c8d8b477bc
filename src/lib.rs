//! microbench-harness library
//!
//! A cooperative step-runner for micro-benchmark suites. Each suite's
//! benchmarks are sequenced Setup -> Run -> TearDown by an explicit state
//! machine driven from a trampoline loop, so suites of any length run in
//! constant call-stack depth. Progress, results, and failures are reported
//! to a caller-supplied [`Notifier`].

pub mod runner;
pub mod suite;
pub mod utils;

pub use runner::{Notifier, RunnerOptions, SuiteRunner, SuiteStatus, TracingNotifier};
pub use suite::{Benchmark, BenchmarkResult, Registry, StepContext, StepFn, Suite};
pub use utils::{DeterministicRng, StepError, StepPhase, SuiteError};

/// Fixed harness version identifier, exposed for notifiers to include in
/// their output.
pub const SUITE_VERSION: &str = "9";
