//! Benchmark definitions and per-benchmark results

use std::cmp::Ordering;
use std::fmt;

use crate::utils::{DeterministicRng, StepError};

/// Context handed to every setup, workload, and teardown closure
///
/// Exposes the runner's deterministic random source so workloads that need
/// randomness draw it from the reseeded sequence instead of ambient entropy.
pub struct StepContext<'a> {
    rng: &'a mut DeterministicRng,
}

impl<'a> StepContext<'a> {
    pub(crate) fn new(rng: &'a mut DeterministicRng) -> Self {
        Self { rng }
    }

    /// The deterministic random source for this suite run
    pub fn rng(&mut self) -> &mut DeterministicRng {
        self.rng
    }
}

/// A setup, workload, or teardown step
pub type StepFn = Box<dyn FnMut(&mut StepContext<'_>) -> Result<(), StepError>>;

/// One named unit of timed work with optional setup/teardown
///
/// Immutable after construction: the builder methods consume `self` and
/// there are no post-construction setters.
pub struct Benchmark {
    name: String,
    run: StepFn,
    setup: Option<StepFn>,
    teardown: Option<StepFn>,
    min_iterations: u64,
}

impl Benchmark {
    /// Default minimum-iterations hint
    pub const DEFAULT_MIN_ITERATIONS: u64 = 32;

    /// Create a benchmark from a name and a workload closure
    pub fn new(
        name: impl Into<String>,
        run: impl FnMut(&mut StepContext<'_>) -> Result<(), StepError> + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
            setup: None,
            teardown: None,
            min_iterations: Self::DEFAULT_MIN_ITERATIONS,
        }
    }

    /// Attach a setup action, invoked once before the measure loop
    pub fn with_setup(
        mut self,
        setup: impl FnMut(&mut StepContext<'_>) -> Result<(), StepError> + 'static,
    ) -> Self {
        self.setup = Some(Box::new(setup));
        self
    }

    /// Attach a teardown action, invoked once after the measure loop
    pub fn with_teardown(
        mut self,
        teardown: impl FnMut(&mut StepContext<'_>) -> Result<(), StepError> + 'static,
    ) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }

    /// Override the minimum-iterations hint (default 32)
    pub fn with_min_iterations(mut self, min_iterations: u64) -> Self {
        self.min_iterations = min_iterations;
        self
    }

    /// Benchmark name, unique within its suite
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum number of workload iterations the measure loop performs
    pub fn min_iterations(&self) -> u64 {
        self.min_iterations
    }

    pub(crate) fn run_setup(&mut self, ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        match self.setup.as_mut() {
            Some(setup) => setup(ctx),
            None => Ok(()),
        }
    }

    pub(crate) fn run_workload(&mut self, ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        (self.run)(ctx)
    }

    pub(crate) fn run_teardown(&mut self, ctx: &mut StepContext<'_>) -> Result<(), StepError> {
        match self.teardown.as_mut() {
            Some(teardown) => teardown(ctx),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Benchmark")
            .field("name", &self.name)
            .field("has_setup", &self.setup.is_some())
            .field("has_teardown", &self.teardown.is_some())
            .field("min_iterations", &self.min_iterations)
            .finish()
    }
}

/// One measured result for a benchmark
///
/// Ordered by its time value.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Name of the benchmark this result measured
    pub benchmark: String,
    /// Wall time of the measure loop in milliseconds
    pub time_ms: f64,
    /// Mean per-iteration latency in microseconds
    pub latency_us: f64,
}

impl BenchmarkResult {
    pub fn new(benchmark: impl Into<String>, time_ms: f64, latency_us: f64) -> Self {
        Self {
            benchmark: benchmark.into(),
            time_ms,
            latency_us,
        }
    }
}

impl PartialEq for BenchmarkResult {
    fn eq(&self, other: &Self) -> bool {
        self.time_ms == other.time_ms
    }
}

impl PartialOrd for BenchmarkResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.time_ms.partial_cmp(&other.time_ms)
    }
}
