//! Suite runner
//!
//! Drives every registered suite's benchmarks in registration order through
//! a fixed Setup -> Run -> TearDown cycle. The per-suite cycle is an
//! explicit state machine stepped from a trampoline loop: each iteration
//! performs one step and stores the next state, so suites of arbitrary
//! benchmark count run in constant call-stack depth.

use std::time::{Duration, Instant};

use hdrhistogram::Histogram;
use tracing::{debug, info, warn};

use super::notifier::{Notifier, SuiteStatus};
use crate::suite::{Benchmark, BenchmarkResult, Registry, StepContext, Suite};
use crate::utils::{DeterministicRng, StepError, StepPhase, SuiteError};

/// Runner tuning knobs
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    /// Minimum wall time the measure loop spends repeating each workload
    pub run_budget: Duration,
}

impl RunnerOptions {
    /// Default measure-loop budget in milliseconds
    pub const DEFAULT_RUN_BUDGET_MS: u64 = 1000;
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            run_budget: Duration::from_millis(Self::DEFAULT_RUN_BUDGET_MS),
        }
    }
}

/// Per-suite execution states, cycled Setup -> Run -> TearDown for each
/// benchmark index until the index reaches the benchmark count
enum SuiteState {
    Setup,
    Run,
    TearDown,
    Done,
}

/// Runs registered suites and reports progress through a [`Notifier`]
pub struct SuiteRunner {
    options: RunnerOptions,
    rng: DeterministicRng,
}

impl SuiteRunner {
    pub fn new() -> Self {
        Self::with_options(RunnerOptions::default())
    }

    pub fn with_options(options: RunnerOptions) -> Self {
        Self {
            options,
            rng: DeterministicRng::new(),
        }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Run every suite in the registry, in registration order
    ///
    /// Suites whose exact name appears in `skip_names` are reported as
    /// skipped instead of run. A step failure aborts only its own suite;
    /// the runner always proceeds to the next one. `notify_score` fires
    /// exactly once after all suites have been processed.
    pub fn run_suites(
        &mut self,
        registry: &mut Registry,
        notifier: &mut dyn Notifier,
        skip_names: &[&str],
    ) {
        for suite in registry.suites_mut() {
            notifier.notify_start(suite.name());
            if skip_names.contains(&suite.name()) {
                debug!(suite = suite.name(), "suite skipped");
                notifier.notify_result(suite.name(), SuiteStatus::Skipped);
                continue;
            }
            self.run_suite(suite, notifier);
        }
        notifier.notify_score(0.0);
    }

    /// Drive one suite's state machine to completion
    fn run_suite(&mut self, suite: &mut Suite, notifier: &mut dyn Notifier) {
        debug!(
            suite = suite.name(),
            benchmarks = suite.benchmark_count(),
            "suite run starting"
        );

        // Identical "random" sequences on every run of the same suite
        self.rng.reseed();
        suite.clear_results();

        let suite_name = suite.name().to_string();
        let mut index = 0;
        let mut state = SuiteState::Setup;

        loop {
            state = match state {
                SuiteState::Setup => {
                    if index == suite.benchmark_count() {
                        info!(
                            suite = %suite_name,
                            results = suite.results().len(),
                            "suite complete"
                        );
                        notifier.notify_result(&suite_name, SuiteStatus::Success);
                        SuiteState::Done
                    } else {
                        let outcome = {
                            let mut ctx = StepContext::new(&mut self.rng);
                            suite.benchmarks_mut()[index].run_setup(&mut ctx)
                        };
                        match outcome {
                            Ok(()) => SuiteState::Run,
                            Err(e) => {
                                report_error(notifier, &suite_name, StepPhase::Setup, e);
                                SuiteState::Done
                            }
                        }
                    }
                }
                SuiteState::Run => {
                    match self.measure(&mut suite.benchmarks_mut()[index]) {
                        Ok(result) => {
                            let benchmark_name = result.benchmark.clone();
                            suite.push_result(result);
                            notifier.notify_step(&benchmark_name);
                            SuiteState::TearDown
                        }
                        Err(e) => {
                            report_error(notifier, &suite_name, StepPhase::Run, e);
                            SuiteState::Done
                        }
                    }
                }
                SuiteState::TearDown => {
                    let outcome = {
                        let mut ctx = StepContext::new(&mut self.rng);
                        suite.benchmarks_mut()[index].run_teardown(&mut ctx)
                    };
                    match outcome {
                        Ok(()) => {
                            index += 1;
                            SuiteState::Setup
                        }
                        Err(e) => {
                            report_error(notifier, &suite_name, StepPhase::TearDown, e);
                            SuiteState::Done
                        }
                    }
                }
                SuiteState::Done => break,
            };
        }
    }

    /// Repeat the workload until the run budget has elapsed and the
    /// benchmark's minimum-iterations hint is satisfied, then record one
    /// result: measure-loop wall time plus mean per-iteration latency.
    fn measure(&mut self, benchmark: &mut Benchmark) -> Result<BenchmarkResult, StepError> {
        let budget = self.options.run_budget;
        let min_iterations = benchmark.min_iterations().max(1);
        let mut histogram =
            Histogram::<u64>::new_with_bounds(1, 3_600_000_000, 3).expect("histogram");

        let start = Instant::now();
        let mut iterations = 0u64;
        loop {
            let iter_start = Instant::now();
            {
                let mut ctx = StepContext::new(&mut self.rng);
                benchmark.run_workload(&mut ctx)?;
            }
            let elapsed_us = iter_start.elapsed().as_micros() as u64;
            histogram.record(elapsed_us.max(1)).ok();
            iterations += 1;

            if iterations >= min_iterations && start.elapsed() >= budget {
                break;
            }
        }

        let elapsed = start.elapsed();
        debug!(
            benchmark = benchmark.name(),
            iterations,
            elapsed_ms = elapsed.as_millis() as u64,
            "measure loop finished"
        );

        Ok(BenchmarkResult::new(
            benchmark.name(),
            elapsed.as_secs_f64() * 1000.0,
            histogram.mean(),
        ))
    }
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Report a step failure and let the caller terminate the suite
fn report_error(notifier: &mut dyn Notifier, suite: &str, phase: StepPhase, source: StepError) {
    let err = SuiteError::new(suite, phase, source);
    warn!(%err, "suite aborted");
    notifier.notify_error(suite, &err);
    // Fallback identifier so progress reporting still advances
    notifier.notify_step(suite);
}
