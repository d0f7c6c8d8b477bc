//! Suites and the suite registry

use super::benchmark::{Benchmark, BenchmarkResult};

/// A named, ordered group of benchmarks sharing one run lifecycle
#[derive(Debug)]
pub struct Suite {
    name: String,
    reference: f64,
    benchmarks: Vec<Benchmark>,
    results: Vec<BenchmarkResult>,
}

impl Suite {
    /// Create a suite from a name, a reference value, and its benchmarks
    pub fn new(name: impl Into<String>, reference: f64, benchmarks: Vec<Benchmark>) -> Self {
        Self {
            name: name.into(),
            reference,
            benchmarks,
            results: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference value used when scoring results against a baseline
    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn benchmark_count(&self) -> usize {
        self.benchmarks.len()
    }

    /// Results accumulated by the most recent run
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub(crate) fn benchmarks_mut(&mut self) -> &mut [Benchmark] {
        &mut self.benchmarks
    }

    /// Cleared at the start of every suite run
    pub(crate) fn clear_results(&mut self) {
        self.results.clear();
    }

    pub(crate) fn push_result(&mut self, result: BenchmarkResult) {
        // A run records at most one result per benchmark
        debug_assert!(self.results.len() < self.benchmarks.len());
        self.results.push(result);
    }
}

/// Ordered collection of suites, appended to as suites are registered
///
/// An explicit object rather than process-wide state, so each test or run
/// can construct its own registry without cross-test leakage.
#[derive(Debug, Default)]
pub struct Registry {
    suites: Vec<Suite>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a suite; registration order is run order. No removal API.
    pub fn register(&mut self, suite: Suite) {
        self.suites.push(suite);
    }

    pub fn len(&self) -> usize {
        self.suites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    pub(crate) fn suites_mut(&mut self) -> &mut [Suite] {
        &mut self.suites
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::benchmark::StepContext;
    use crate::utils::StepError;

    fn noop(_: &mut StepContext<'_>) -> Result<(), StepError> {
        Ok(())
    }

    #[test]
    fn test_registration_order_preserved() {
        let mut registry = Registry::new();
        registry.register(Suite::new("A", 100.0, vec![]));
        registry.register(Suite::new("B", 100.0, vec![]));
        registry.register(Suite::new("C", 100.0, vec![]));

        let names: Vec<&str> = registry.suites().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_suite_starts_with_no_results() {
        let suite = Suite::new("A", 100.0, vec![Benchmark::new("b1", noop)]);
        assert_eq!(suite.benchmark_count(), 1);
        assert!(suite.results().is_empty());
    }

    #[test]
    fn test_clear_results() {
        let mut suite = Suite::new("A", 100.0, vec![Benchmark::new("b1", noop)]);
        suite.push_result(BenchmarkResult::new("b1", 1.0, 1.0));
        assert_eq!(suite.results().len(), 1);
        suite.clear_results();
        assert!(suite.results().is_empty());
    }
}
